use super::{Formatter, ToQuery};

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

/// Delimited by an arbitrary separator
pub(super) struct Delimited<'a, L>(pub(super) L, pub(super) &'a str);

impl<L> ToQuery for Comma<L>
where
    L: IntoIterator,
    L::Item: ToQuery,
{
    fn to_query(self, f: &mut Formatter<'_>) {
        Delimited(self.0, ", ").to_query(f);
    }
}

impl<L> ToQuery for Delimited<'_, L>
where
    L: IntoIterator,
    L::Item: ToQuery,
{
    fn to_query(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s, i);
            s = self.1;
        }
    }
}
