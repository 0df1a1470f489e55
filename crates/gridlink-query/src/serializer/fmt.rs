use super::Formatter;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr ),* $(,)?) => {{
        $(
            $fragments.to_query($f);
        )*
    }};
}

pub(super) trait ToQuery {
    fn to_query(self, f: &mut Formatter<'_>);
}

impl ToQuery for &str {
    fn to_query(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToQuery for &String {
    fn to_query(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}
