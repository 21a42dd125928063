//! Drives a hero through a fixed number of shots.

use crate::error::Result;
use crate::hero::{Hero, Shot};
use std::io::Write;
use tracing::debug;

/// Shots fired by the reference run.
pub const DEFAULT_SHOTS: u32 = 9;

/// Fire `shots` times, writing one report line per shot to `out` in order.
///
/// ```rust
/// use hero_state::{driver, Hero};
///
/// let mut hero = Hero::new();
/// let mut out = Vec::new();
/// let shots = driver::run(&mut hero, 4, &mut out).unwrap();
///
/// assert_eq!(shots.len(), 4);
/// assert_eq!(
///     String::from_utf8(out).unwrap().lines().last(),
///     Some("Hero do damage: 10")
/// );
/// ```
pub fn run<W: Write>(hero: &mut Hero, shots: u32, out: W) -> Result<Vec<Shot>> {
    let mut fired = Vec::new();
    drive(hero, shots, out, |shot| fired.push(shot))?;
    Ok(fired)
}

/// Like [`run`] but keeps nothing: each line is written as the shot is
/// fired, so memory stays flat however many shots are requested.
pub fn stream<W: Write>(hero: &mut Hero, shots: u32, out: W) -> Result<()> {
    drive(hero, shots, out, |_| {})
}

fn drive<W, F>(hero: &mut Hero, shots: u32, mut out: W, mut on_shot: F) -> Result<()>
where
    W: Write,
    F: FnMut(Shot),
{
    debug!(shots, start = hero.shots(), "driving hero");
    for _ in 0..shots {
        let shot = hero.shoot();
        writeln!(out, "{shot}")?;
        on_shot(shot);
    }
    out.flush()?;
    Ok(())
}

/// Damage values of the first `shots` shots of a fresh default hero.
pub fn damage_trace(shots: u32) -> Vec<u32> {
    let mut hero = Hero::new();
    (0..shots).map(|_| hero.shoot().damage).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn zero_shots_writes_nothing() {
        let mut hero = Hero::new();
        let mut out = Vec::new();
        let shots = run(&mut hero, 0, &mut out).unwrap();

        assert!(shots.is_empty());
        assert!(out.is_empty());
        assert_eq!(hero.shots(), 0);
    }

    #[test]
    fn run_continues_from_current_counter() {
        let mut hero = Hero::new();
        run(&mut hero, 2, io::sink()).unwrap();
        let shots = run(&mut hero, 2, io::sink()).unwrap();

        assert_eq!(shots[0].number, 3);
        assert_eq!(shots[1].damage, 10);
    }

    #[test]
    fn write_failure_surfaces_as_io_error() {
        let mut hero = Hero::new();
        let result = run(&mut hero, 3, BrokenPipe);

        assert!(matches!(result, Err(Error::Io(_))));
        // The first shot was fired before the write failed.
        assert_eq!(hero.shots(), 1);
    }

    #[test]
    fn stream_writes_the_same_lines_as_run() {
        let mut collected = Vec::new();
        let mut streamed = Vec::new();

        run(&mut Hero::new(), 12, &mut collected).unwrap();
        let mut hero = Hero::new();
        stream(&mut hero, 12, &mut streamed).unwrap();

        assert_eq!(collected, streamed);
        assert_eq!(hero.shots(), 12);
    }

    #[test]
    fn stream_handles_large_runs_without_history() {
        let mut hero = Hero::builder().record_history(false).build().unwrap();
        stream(&mut hero, 1_000_000, io::sink()).unwrap();

        assert_eq!(hero.shots(), 1_000_000);
        assert!(hero.history().is_empty());
    }

    #[test]
    fn stream_surfaces_write_failure() {
        let mut hero = Hero::new();
        assert!(matches!(stream(&mut hero, 3, BrokenPipe), Err(Error::Io(_))));
    }

    #[test]
    fn damage_trace_of_reference_run() {
        assert_eq!(damage_trace(DEFAULT_SHOTS), vec![5, 5, 5, 10, 5, 5, 10, 5, 5]);
    }
}
