// src/mount/archive.rs
//! Reading of ustar filesystem images, with optional gzip compression.

use flate2::read::GzDecoder;
use std::io::Read;

use super::MountError;

const BLOCK_SIZE: usize = 512;

/// One parsed entry of a filesystem image.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub path: String,
    pub content: Vec<u8>,
    pub mode: u32,
    pub is_directory: bool,
    pub is_symlink: bool,
    pub link_target: String,
}

/// Read a null-terminated string from a fixed-size header field.
fn read_string(header: &[u8], offset: usize, len: usize) -> String {
    let slice = &header[offset..offset + len];
    let end = slice.iter().position(|&b| b == 0).unwrap_or(len);
    String::from_utf8_lossy(&slice[..end]).to_string()
}

/// Read an octal ASCII value from a fixed-size header field.
fn read_octal(header: &[u8], offset: usize, len: usize) -> u64 {
    let s = read_string(header, offset, len);
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0;
    }
    u64::from_str_radix(trimmed, 8).unwrap_or(0)
}

/// Check if a 512-byte block is all zeros (end-of-archive marker).
fn is_zero_block(block: &[u8]) -> bool {
    block.iter().all(|&b| b == 0)
}

/// Header checksum: sum of all bytes with the checksum field read as spaces.
fn calculate_checksum(header: &[u8; BLOCK_SIZE]) -> u32 {
    let mut sum: u32 = 0;
    for (i, &byte) in header.iter().enumerate() {
        if (148..156).contains(&i) {
            sum += 0x20u32;
        } else {
            sum += byte as u32;
        }
    }
    sum
}

fn verify_checksum(header: &[u8; BLOCK_SIZE]) -> bool {
    let stored = read_octal(header, 148, 8) as u32;
    stored == calculate_checksum(header)
}

/// Check for the gzip magic bytes (0x1f 0x8b).
pub fn is_gzip(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == 0x1f && data[1] == 0x8b
}

/// Decompress a gzip-compressed image.
pub fn decompress_gzip(data: &[u8]) -> Result<Vec<u8>, MountError> {
    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| MountError::Corrupt(format!("gzip: {}", e)))?;
    Ok(decompressed)
}

/// Parse a ustar archive into entries.
///
/// Pax extended-header blocks (`x`/`g`) and hard links (`1`) are skipped;
/// any other unknown type flag fails the mount.
pub fn parse_archive(data: &[u8]) -> Result<Vec<ArchiveEntry>, MountError> {
    let mut entries = Vec::new();
    let mut offset = 0;
    let mut zero_blocks = 0;

    while offset + BLOCK_SIZE <= data.len() {
        let block = &data[offset..offset + BLOCK_SIZE];

        if is_zero_block(block) {
            zero_blocks += 1;
            offset += BLOCK_SIZE;
            if zero_blocks >= 2 {
                break;
            }
            continue;
        }
        zero_blocks = 0;

        let header: [u8; BLOCK_SIZE] = block
            .try_into()
            .map_err(|_| MountError::Corrupt("invalid header block".to_string()))?;

        if !verify_checksum(&header) {
            return Err(MountError::Corrupt("invalid header checksum".to_string()));
        }

        let name = read_string(&header, 0, 100);
        let prefix = read_string(&header, 345, 155);
        let path = if prefix.is_empty() {
            name
        } else {
            format!("{}/{}", prefix, name)
        };

        let mode = read_octal(&header, 100, 8) as u32;
        let size = read_octal(&header, 124, 12);
        let type_flag = header[156];
        let link_target = read_string(&header, 157, 100);

        offset += BLOCK_SIZE;

        // `\0` appears in pre-POSIX archives for regular files.
        let (is_directory, is_symlink, skip) = match type_flag {
            b'0' | 0 => (false, false, false),
            b'5' => (true, false, false),
            b'2' => (false, true, false),
            b'1' | b'x' | b'g' | b'L' => (false, false, true),
            other => {
                return Err(MountError::Unsupported {
                    type_flag: (other as char).to_string(),
                    path,
                })
            }
        };

        let content = if !is_directory && !is_symlink && size > 0 {
            let end = offset + size as usize;
            if end > data.len() {
                return Err(MountError::Corrupt("unexpected end of archive".to_string()));
            }
            let content = data[offset..end].to_vec();
            let blocks = (size as usize).div_ceil(BLOCK_SIZE);
            offset += blocks * BLOCK_SIZE;
            content
        } else {
            Vec::new()
        };

        if skip {
            continue;
        }

        entries.push(ArchiveEntry {
            path,
            content,
            mode,
            is_directory,
            is_symlink,
            link_target,
        });
    }

    Ok(entries)
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_parse_files_and_dirs() {
        let mut data = Vec::new();
        push_dir(&mut data, "docs/");
        push_file(&mut data, "docs/a.txt", b"hello");
        push_file(&mut data, "top.txt", b"");
        finish(&mut data);

        let entries = parse_archive(&data).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].is_directory);
        assert_eq!(entries[0].path, "docs/");
        assert_eq!(entries[1].path, "docs/a.txt");
        assert_eq!(entries[1].content, b"hello");
        assert_eq!(entries[2].content, b"");
    }

    #[test]
    fn test_parse_symlink_entry() {
        let mut data = Vec::new();
        push_symlink(&mut data, "link", "docs/a.txt");
        finish(&mut data);

        let entries = parse_archive(&data).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_symlink);
        assert_eq!(entries[0].path, "link");
        assert_eq!(entries[0].link_target, "docs/a.txt");
    }

    #[test]
    fn test_parse_empty_archive() {
        let mut data = Vec::new();
        finish(&mut data);
        assert!(parse_archive(&data).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_checksum() {
        let mut data = Vec::new();
        push_file(&mut data, "a.txt", b"x");
        finish(&mut data);
        data[0] ^= 0xff;
        assert!(matches!(parse_archive(&data), Err(MountError::Corrupt(_))));
    }

    #[test]
    fn test_parse_rejects_truncated_content() {
        let mut data = Vec::new();
        push_file(&mut data, "a.txt", b"hello world");
        data.truncate(BLOCK_SIZE + 4);
        assert!(matches!(parse_archive(&data), Err(MountError::Corrupt(_))));
    }

    #[test]
    fn test_gzip_detection() {
        assert!(is_gzip(&[0x1f, 0x8b, 0x08]));
        assert!(!is_gzip(b"ustar"));
        assert!(!is_gzip(&[]));
    }
}
