use std::{fmt, num::NonZeroU32};

use serde::{Deserialize, Serialize};

/// A disk, identified by its size. The smallest disk has size 1.
///
/// Invariant: the size is never zero
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Disk {
    size: NonZeroU32,
}

impl Disk {
    pub fn new(size: u32) -> Option<Self> {
        NonZeroU32::new(size).map(|size| Disk { size })
    }

    pub const fn size(self) -> u32 {
        self.size.get()
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_disk_is_rejected() {
        assert_eq!(Disk::new(0), None);
        assert_eq!(Disk::new(3).map(Disk::size), Some(3));
    }

    #[test]
    fn test_disks_are_ordered_by_size() {
        let small = Disk::new(1).unwrap();
        let large = Disk::new(4).unwrap();
        assert!(small < large);
    }

    #[test]
    fn test_serializes_as_bare_size() {
        let disk = Disk::new(7).unwrap();
        assert_eq!(serde_json::to_string(&disk).unwrap(), "7");
        assert_eq!(serde_json::from_str::<Disk>("7").unwrap(), disk);
        assert!(serde_json::from_str::<Disk>("0").is_err());
    }
}
