use crate::error::Error;
use crate::ipv4::{descending, Ipv4Address};
use log::{debug, trace};
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::{BufRead, Write};

/// Selection applied to a sorted pool when printing a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    FirstOctet(u8),
    FirstTwoOctets(u8, u8),
    AnyOctet(u8),
}

impl Filter {
    pub fn matches(&self, ip: &Ipv4Address) -> bool {
        let [a, b, _, _] = ip.octets();
        match *self {
            Filter::FirstOctet(x) => a == x,
            Filter::FirstTwoOctets(x, y) => a == x && b == y,
            Filter::AnyOctet(x) => ip.has_octet(x),
        }
    }
}

/// The passes printed after the full list, in order.
pub const REPORT_FILTERS: [Filter; 3] = [
    Filter::FirstOctet(1),
    Filter::FirstTwoOctets(46, 70),
    Filter::AnyOctet(46),
];

/// Everything before the first tab; the rest of the line is ignored.
pub fn address_field(line: &str) -> &str {
    match line.find('\t') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IpPool {
    inner: Vec<Ipv4Address>,
}

impl IpPool {
    pub fn new() -> Self {
        IpPool { inner: Vec::new() }
    }

    /// Reads the whole stream, failing on the first malformed line.
    pub fn read_from<R: BufRead>(input: R) -> Result<Self, Error> {
        let mut pool = IpPool::new();
        for (n, line) in input.lines().enumerate() {
            let line = line?;
            let ip = Ipv4Address::parse(address_field(&line))
                .map_err(|source| Error::Format { line: n + 1, source })?;
            trace!("line {}: {}", n + 1, ip);
            pool.push(ip);
        }
        debug!("read {} addresses", pool.len());
        Ok(pool)
    }

    pub fn push(&mut self, ip: Ipv4Address) {
        self.inner.push(ip);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ipv4Address> {
        self.inner.iter()
    }

    pub fn sort_descending(&mut self) {
        self.inner.sort_unstable_by(descending);
    }

    pub fn filter(&self, filter: Filter) -> impl Iterator<Item = &Ipv4Address> + '_ {
        self.inner.iter().filter(move |ip| filter.matches(ip))
    }

    /// Full list followed by one pass per entry of `REPORT_FILTERS`,
    /// with nothing separating the passes.
    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        write!(out, "{}", self)?;
        for filter in REPORT_FILTERS.iter() {
            let mut count = 0;
            for ip in self.filter(*filter) {
                writeln!(out, "{}", ip)?;
                count += 1;
            }
            debug!("{:?}: {} addresses", filter, count);
        }
        Ok(())
    }
}

impl Display for IpPool {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for ip in self.inner.iter() {
            writeln!(f, "{}", ip)?;
        }
        Ok(())
    }
}

impl From<Vec<Ipv4Address>> for IpPool {
    fn from(inner: Vec<Ipv4Address>) -> Self {
        IpPool { inner }
    }
}

impl<'a> IntoIterator for &'a IpPool {
    type Item = &'a Ipv4Address;
    type IntoIter = std::slice::Iter<'a, Ipv4Address>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// Read everything, sort it, then print the report.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<(), Error> {
    let mut pool = IpPool::read_from(input)?;
    pool.sort_descending();
    pool.write_report(&mut output)?;
    output.flush()?;
    Ok(())
}
