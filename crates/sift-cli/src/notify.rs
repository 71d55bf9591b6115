use std::io::{self, Write};
use std::time::Duration;

const BELL: &[u8] = b"\x07";

/// Writes the terminal bell `times` times, pausing `gap` between rings.
pub(crate) fn ring<W: Write>(out: &mut W, times: usize, gap: Duration) -> io::Result<()> {
    for i in 0..times {
        if i > 0 && !gap.is_zero() {
            std::thread::sleep(gap);
        }
        out.write_all(BELL)?;
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_requested_number_of_times() {
        let mut out = Vec::new();
        ring(&mut out, 3, Duration::ZERO).unwrap();
        assert_eq!(out, b"\x07\x07\x07");
    }

    #[test]
    fn zero_times_writes_nothing() {
        let mut out = Vec::new();
        ring(&mut out, 0, Duration::from_secs(5)).unwrap();
        assert!(out.is_empty());
    }
}
