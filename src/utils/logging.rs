/// Console sink for the table's debug flag. No functional effect.
#[derive(Debug, Clone, Copy)]
pub struct DebugLogger {
    enabled: bool,
}

impl DebugLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn log_with_prefix(&self, prefix: &str, msg: &str) {
        if self.enabled {
            eprintln!("Debug [{}]: {}", prefix, msg);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_flag() {
        assert!(DebugLogger::new(true).is_enabled());
        let quiet = DebugLogger::new(false);
        assert!(!quiet.is_enabled());
        // Disabled logger swallows output without side effects
        quiet.log_with_prefix("instances", "sorted by 'age' asc");
    }
}
