/// Part of the top suggestion the user has not typed yet
///
/// Slices the first suggestion past as many characters as the query has.
/// The server is trusted to return suggestions that extend the query; when
/// the top one differs in case (`"Re"` vs `"report"`) the remainder is still
/// taken positionally, so accepting it yields `"Report"`.
pub fn compute_remainder(query: &str, suggestions: &[String]) -> String {
    let Some(top) = suggestions.first() else {
        return String::new();
    };

    let typed = query.chars().count();
    top.chars().skip(typed).collect()
}
