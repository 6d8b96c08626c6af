//! DNS-label name comparison used by record lookups.

/// Strips a single trailing root dot, if present.
pub fn trim_root(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Case-insensitive DNS name equality. Only ASCII letters fold; other bytes
/// must match exactly.
pub fn names_equal(a: &str, b: &str) -> bool {
    trim_root(a).eq_ignore_ascii_case(trim_root(b))
}

/// The portion of `name` before the first label separator.
pub fn first_label(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// Whether a record named `record_name` answers a lookup for `query_name`.
///
/// A dotted query is compared against the full record name. A bare label is
/// compared against the record's first label only, so `Foo` finds
/// `Foo._http._tcp.local`.
pub fn name_matches(record_name: &str, query_name: &str) -> bool {
    if query_name.contains('.') {
        names_equal(record_name, query_name)
    } else {
        names_equal(first_label(record_name), query_name)
    }
}
