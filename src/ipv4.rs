use crate::error::FormatError;
use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// One IPv4 address, octets kept in textual left-to-right order.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash)]
pub struct Ipv4Address {
    octets: [u8; 4],
}

impl Ipv4Address {
    pub fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Ipv4Address {
            octets: [a, b, c, d],
        }
    }

    pub fn parse(s: &str) -> Result<Self, FormatError> {
        s.parse()
    }

    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// Zero-based octet access, `octet(0)` is the leftmost one.
    pub fn octet(&self, index: usize) -> Option<u8> {
        self.octets.get(index).copied()
    }

    pub fn has_octet(&self, value: u8) -> bool {
        self.octets.iter().any(|&o| o == value)
    }
}

/// Larger addresses first: compares octet1, then octet2, and so on,
/// with the natural order reversed.
pub fn descending(a: &Ipv4Address, b: &Ipv4Address) -> Ordering {
    b.octets.cmp(&a.octets)
}

impl From<[u8; 4]> for Ipv4Address {
    fn from(octets: [u8; 4]) -> Self {
        Ipv4Address { octets }
    }
}

impl From<u32> for Ipv4Address {
    fn from(ip: u32) -> Self {
        Ipv4Address {
            octets: ip.to_be_bytes(),
        }
    }
}

impl From<Ipv4Address> for u32 {
    fn from(ip: Ipv4Address) -> Self {
        u32::from_be_bytes(ip.octets)
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(ip: Ipv4Addr) -> Self {
        Ipv4Address { octets: ip.octets() }
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(ip: Ipv4Address) -> Self {
        Ipv4Addr::from(ip.octets)
    }
}

impl FromStr for Ipv4Address {
    type Err = FormatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref DIGITS: Regex = Regex::new(r"^-?[0-9]+$").expect("Not possible");
        }
        fn parse_octet(segment: &str) -> Result<u8, FormatError> {
            if !DIGITS.is_match(segment) {
                return Err(FormatError::NotANumber {
                    segment: segment.to_owned(),
                });
            }
            if let Some(digits) = segment.strip_prefix('-') {
                if digits.bytes().all(|b| b == b'0') {
                    return Ok(0);
                }
                return Err(FormatError::OutOfRange {
                    segment: segment.to_owned(),
                });
            }
            // Only digits by now, so any failure is an overflow.
            segment.parse::<u8>().map_err(|_| FormatError::OutOfRange {
                segment: segment.to_owned(),
            })
        }

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return Err(FormatError::WrongOctetCount { found: parts.len() });
        }
        Ok(Ipv4Address::new(
            parse_octet(parts[0])?,
            parse_octet(parts[1])?,
            parse_octet(parts[2])?,
            parse_octet(parts[3])?,
        ))
    }
}

impl Display for Ipv4Address {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let [a, b, c, d] = self.octets;
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}
