//! Parameter list splitting

/// Splits a parameter body on `,`.
///
/// A comma preceded by an odd number of backslashes is literal; the
/// escaping backslash is dropped and the rest are kept as written. An
/// empty body yields no parameters.
pub fn split_params(body: &str) -> Vec<String> {
    if body.is_empty() {
        return Vec::new();
    }

    let mut params = Vec::new();
    let mut current = String::new();
    let mut backslashes = 0usize;

    for c in body.chars() {
        match c {
            '\\' => {
                backslashes += 1;
                current.push(c);
            }
            ',' if backslashes % 2 == 1 => {
                current.pop();
                current.push(',');
                backslashes = 0;
            }
            ',' => {
                params.push(std::mem::take(&mut current));
                backslashes = 0;
            }
            _ => {
                backslashes = 0;
                current.push(c);
            }
        }
    }
    params.push(current);
    params
}
