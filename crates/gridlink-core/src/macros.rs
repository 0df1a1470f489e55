/// Builds a [`Record`](crate::Record) from `attribute => value` pairs.
///
/// ```
/// let record = gridlink_core::record! {
///     "name" => "Ada",
///     "age" => 36_i64,
/// };
/// assert_eq!(record.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    (
        $( $attr:expr => $value:expr ),+ $(,)?
    ) => {
        [ $( ($attr.to_string(), $crate::Value::from($value)), )+ ]
            .into_iter()
            .collect::<$crate::Record>()
    };
}
