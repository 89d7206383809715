use super::Sink;
use std::io::{self, Write};

/// Writes lines to standard error, followed by the stack trace if any.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl StderrSink {
    /// Writes `line` and then `stack_trace` to `out`, one per line.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error hit while writing.
    pub fn write_to(
        out: &mut impl Write,
        line: &str,
        stack_trace: Option<&str>,
    ) -> io::Result<()> {
        writeln!(out, "{}", line)?;
        if let Some(trace) = stack_trace {
            writeln!(out, "{}", trace)?;
        }
        Ok(())
    }
}

impl Sink for StderrSink {
    fn write(&self, line: &str, _weight: u16, stack_trace: Option<&str>) {
        // A closed or full stderr must not reach the caller.
        let _ = Self::write_to(&mut io::stderr().lock(), line, stack_trace);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn line_is_followed_by_trace() {
        let mut out = Vec::new();
        StderrSink::write_to(&mut out, " [ERROR] boom", Some("at frame 0")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), " [ERROR] boom\nat frame 0\n");
    }

    #[test]
    fn line_without_trace() {
        let mut out = Vec::new();
        StderrSink::write_to(&mut out, " [INFO] ok", None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), " [INFO] ok\n");
    }

    #[test]
    fn write_errors_are_reported_to_the_caller_of_write_to() {
        let err = StderrSink::write_to(&mut Broken, "lost", None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn sink_write_never_panics() {
        StderrSink.write(" [DEBUG] to stderr", 500, Some("trace"));
    }
}
