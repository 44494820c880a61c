/// Builds a [`CaseInsensitiveDict`](crate::CaseInsensitiveDict) from
/// `key => value` pairs, inserted left to right.
///
/// ```
/// use caseless_dict::{CaseInsensitiveDict, caseless_dict};
///
/// let dict: CaseInsensitiveDict<String, u32> = caseless_dict! {
///     "Accept" => 1,
///     "ACCEPT" => 2,
///     "Host" => 3,
/// };
///
/// assert_eq!(dict.len(), 2);
/// assert_eq!(dict.get("accept"), Some(&2));
/// ```
#[macro_export]
macro_rules! caseless_dict {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut dict = $crate::CaseInsensitiveDict::new();
        $(
            dict.insert($key, $value);
        )*
        dict
    }};
}
