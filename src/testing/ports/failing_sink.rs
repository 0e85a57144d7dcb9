use std::io::{self, Write};

/// Output stream that fails from the `fail_on_call`-th write onwards.
pub struct FailingSink {
    fail_on_call: usize,
    calls: usize,
    pub written: Vec<u8>,
}

impl FailingSink {
    pub fn on_call(fail_on_call: usize) -> Self {
        Self { fail_on_call, calls: 0, written: Vec::new() }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        if self.calls >= self.fail_on_call {
            return Err(io::Error::other("write failed"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
