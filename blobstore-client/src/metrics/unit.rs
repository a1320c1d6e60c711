use std::{fmt, str::FromStr};

/// SI byte units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteUnit {
    /// 1 byte
    Byte,
    /// 2<sup>10</sup> bytes.
    Kibibyte,
    /// 2<sup>20</sup> bytes.
    Mebibyte,
    /// 2<sup>30</sup> bytes.
    Gibibyte,
}

impl ByteUnit {
    /// Convert some number of bytes into this unit as an `f64`
    pub fn convert(&self, bytes: u64) -> f64 {
        bytes as f64 / self.as_bytes_u64() as f64
    }

    /// Figure out the best unit to display the given number of bytes in
    /// and return a [`ByteCountDisplayContext`] with the appropriate units set
    pub fn display(total_bytes: u64) -> ByteCountDisplayContext {
        let units = &[ByteUnit::Gibibyte, ByteUnit::Mebibyte, ByteUnit::Kibibyte];
        let mut unit = ByteUnit::Byte;
        for u in units {
            if total_bytes >= u.as_bytes_u64() {
                unit = *u;
                break;
            }
        }

        ByteCountDisplayContext::new(total_bytes, unit)
    }

    /// The number of bytes represented by this unit
    pub const fn as_bytes_u64(&self) -> u64 {
        self.as_bytes_usize() as u64
    }

    /// The number of bytes represented by this unit
    pub const fn as_bytes_usize(&self) -> usize {
        match self {
            ByteUnit::Byte => 1,
            ByteUnit::Kibibyte => 1 << 10,
            ByteUnit::Mebibyte => 1 << 20,
            ByteUnit::Gibibyte => 1 << 30,
        }
    }

    pub(crate) const fn as_str(&self) -> &'static str {
        match self {
            ByteUnit::Byte => "B",
            ByteUnit::Kibibyte => "KiB",
            ByteUnit::Mebibyte => "MiB",
            ByteUnit::Gibibyte => "GiB",
        }
    }
}

impl AsRef<str> for ByteUnit {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for ByteUnit {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s {
            "B" => ByteUnit::Byte,
            "KiB" => ByteUnit::Kibibyte,
            "MiB" => ByteUnit::Mebibyte,
            "GiB" => ByteUnit::Gibibyte,
            _ => {
                return Err(crate::error::invalid_input(format!(
                    "unknown byte unit '{}'",
                    s
                )))
            }
        };

        Ok(unit)
    }
}

/// Display context to format a value representing a number of bytes in a
/// particular unit
#[derive(Debug)]
pub struct ByteCountDisplayContext {
    /// The byte count to display
    pub total_bytes: u64,
    /// The precise unit to display the byte count as
    pub unit: ByteUnit,
}

impl ByteCountDisplayContext {
    /// Create a new display context for the number of bytes in a specific unit
    pub fn new(total_bytes: u64, unit: ByteUnit) -> Self {
        Self { total_bytes, unit }
    }
}

impl fmt::Display for ByteCountDisplayContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total_bytes % self.unit.as_bytes_u64() == 0 {
            let converted = self.total_bytes / self.unit.as_bytes_u64();
            return write!(f, "{converted} {}", self.unit.as_str());
        }
        let precision = f.precision().unwrap_or(3);
        write!(
            f,
            "{1:.*} {2:}",
            precision,
            self.unit.convert(self.total_bytes),
            self.unit.as_str()
        )
    }
}
