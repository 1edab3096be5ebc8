/// A `localtime` value split into its date and time parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTime<'a> {
    pub date: &'a str,
    pub time: &'a str,
}

impl<'a> LocalTime<'a> {
    /// Split `"<date> <time>"` on the first space.
    ///
    /// A value without a space is taken to be the time alone; the date is then empty.
    pub fn split(localtime: &'a str) -> Self {
        match localtime.split_once(' ') {
            Some((date, time)) => Self { date, time },
            None => Self { date: "", time: localtime },
        }
    }
}
