use core::{fmt, slice};

use heapless::Vec;

use crate::types::waypoint::Waypoint;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Error {
    Full,
    Empty,
    EndOfPath,
    StartOfPath,
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let err_string = match self {
            Self::Full => "No room for more waypoints",
            Self::Empty => "No waypoint",
            Self::EndOfPath => "Already at last waypoint of open path",
            Self::StartOfPath => "Already at first waypoint of open path",
            Self::OutOfRange => "Waypoint index out of range",
        };
        write!(f, "{}", err_string)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Route of at most `N` waypoints with a cursor stepping through it.
///
/// When closed, the waypoint after the last one is the first one and vice versa.
#[derive(Clone, Debug, Default)]
pub struct Waypoints<const N: usize> {
    waypoints: Vec<Waypoint, N>,
    current: usize, // always < len when not empty
    closed_path: bool,
}

impl<const N: usize> Waypoints<N> {
    pub const fn new() -> Self {
        Self { waypoints: Vec::new(), current: 0, closed_path: false }
    }

    pub fn add(&mut self, waypoint: Waypoint) -> Result<(), Error> {
        self.waypoints.push(waypoint).map_err(|_| {
            debug!("Waypoints full, capacity {}", N);
            Error::Full
        })
    }

    pub fn set_closed_path(&mut self, closed_path: bool) {
        self.closed_path = closed_path
    }

    pub fn is_closed_path(&self) -> bool {
        self.closed_path
    }

    fn last_index(&self) -> Result<usize, Error> {
        self.waypoints.len().checked_sub(1).ok_or(Error::Empty)
    }

    pub fn advance(&mut self) -> Result<(), Error> {
        let last = self.last_index()?;
        if self.current < last {
            self.current += 1;
            return Ok(());
        }
        if !self.closed_path {
            return Err(Error::EndOfPath);
        }
        trace!("Waypoint cursor wrap to start");
        self.current = 0;
        Ok(())
    }

    pub fn current(&self) -> Result<Waypoint, Error> {
        self.waypoints.get(self.current).copied().ok_or(Error::Empty)
    }

    pub fn next(&self) -> Result<Waypoint, Error> {
        let last = self.last_index()?;
        if self.current < last {
            return Ok(self.waypoints[self.current + 1]);
        }
        if !self.closed_path {
            return Err(Error::EndOfPath);
        }
        trace!("Next waypoint wrap to start");
        Ok(self.waypoints[0])
    }

    pub fn previous(&self) -> Result<Waypoint, Error> {
        let last = self.last_index()?;
        if self.current > 0 {
            return Ok(self.waypoints[self.current - 1]);
        }
        if !self.closed_path {
            return Err(Error::StartOfPath);
        }
        trace!("Previous waypoint wrap to end");
        Ok(self.waypoints[last])
    }

    /// Absolute access, cursor not involved
    pub fn at(&self, index: usize) -> Result<Waypoint, Error> {
        if self.waypoints.is_empty() {
            return Err(Error::Empty);
        }
        self.waypoints.get(index).copied().ok_or(Error::OutOfRange)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.waypoints.len() == N
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn as_slice(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn iter(&self) -> slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }

    pub fn clear(&mut self) {
        debug!("Clear {} waypoints", self.waypoints.len());
        self.waypoints.clear();
        self.current = 0;
        self.closed_path = false;
    }
}

impl<'a, const N: usize> IntoIterator for &'a Waypoints<N> {
    type Item = &'a Waypoint;
    type IntoIter = slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}
