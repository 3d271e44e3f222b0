// src/commands/date.rs
use chrono::Local;

use crate::session::Session;

use super::types::CommandResult;

/// Print the current local time, e.g. `Mon Jan 02 15:04:05 2006`.
pub fn execute(_session: &mut Session, _args: &[String]) -> CommandResult {
    let now = Local::now();
    CommandResult::success(format!("{}\n", now.format("%a %b %d %H:%M:%S %Y")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_date_shape() {
        let mut s = Session::new("u", "h", PathBuf::from("/tmp/vshell-test"));
        let r = execute(&mut s, &[]);
        assert_eq!(r.exit_code, 0);

        let line = r.stdout.trim_end();
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 5);

        let days = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        assert!(days.contains(&fields[0]));
        let months = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        assert!(months.contains(&fields[1]));
        assert_eq!(fields[2].len(), 2);
        assert_eq!(fields[3].len(), 8);
        assert_eq!(fields[4].len(), 4);
    }

    #[test]
    fn test_date_ignores_arguments() {
        let mut s = Session::new("u", "h", PathBuf::from("/tmp/vshell-test"));
        let r = execute(&mut s, &["+%Y".to_string()]);
        assert_eq!(r.exit_code, 0);
        assert!(!r.stdout.is_empty());
    }
}
