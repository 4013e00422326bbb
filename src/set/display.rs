//! Text rendering of [`Set`].

use std::fmt;

use super::Set;

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

/// Renders as `(Set[<element type>]: [e1 e2 ...])`.
///
/// Element order is unspecified but stable while the set is unmodified.
///
/// # Examples
///
/// ```rust
/// use toolbox::set::Set;
///
/// let set = Set::of([42]);
/// assert_eq!(set.to_string(), "(Set[i32]: [42])");
///
/// let empty: Set<String> = Set::new();
/// assert_eq!(empty.to_string(), "(Set[String]: [])");
/// ```
impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(Set[{}]: [", element_type_name::<T>())?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(" ")?;
            }
            write!(formatter, "{element}")?;
        }
        formatter.write_str("])")
    }
}

/// Returns the name of `T` with every module path stripped.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
fn element_type_name<T: ?Sized>() -> String {
    let full_name = std::any::type_name::<T>();
    let mut short_name = String::with_capacity(full_name.len());
    let mut path = String::new();

    for character in full_name.chars() {
        if character.is_alphanumeric() || character == '_' || character == ':' {
            path.push(character);
        } else {
            short_name.push_str(last_segment(&path));
            path.clear();
            short_name.push(character);
        }
    }
    short_name.push_str(last_segment(&path));

    short_name
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(element_type_name::<i32>(), "i32")]
    #[case(element_type_name::<String>(), "String")]
    #[case(element_type_name::<&str>(), "&str")]
    #[case(element_type_name::<Vec<String>>(), "Vec<String>")]
    #[case(element_type_name::<(u8, Option<String>)>(), "(u8, Option<String>)")]
    fn test_element_type_name(#[case] actual: String, #[case] expected: &str) {
        assert_eq!(actual, expected);
    }

    #[rstest]
    fn test_display_empty() {
        let set: Set<i32> = Set::new();
        assert_eq!(format!("{set}"), "(Set[i32]: [])");
    }

    #[rstest]
    fn test_display_single_element() {
        let set = Set::of(["go"]);
        assert_eq!(format!("{set}"), "(Set[&str]: [go])");
    }

    #[rstest]
    fn test_display_multiple_elements() {
        let set = Set::of([1, 2, 3]);
        let display = format!("{set}");

        assert!(display.starts_with("(Set[i32]: ["));
        assert!(display.ends_with("])"));

        let inner = &display["(Set[i32]: [".len()..display.len() - "])".len()];
        let mut rendered: Vec<&str> = inner.split(' ').collect();
        rendered.sort_unstable();
        assert_eq!(rendered, vec!["1", "2", "3"]);
    }

    #[rstest]
    fn test_display_is_stable_for_unmodified_set() {
        let set: Set<i32> = (0..64).collect();
        assert_eq!(set.to_string(), set.to_string());
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(format!("{:?}", Set::of([7])), "{7}");
        assert_eq!(format!("{:?}", Set::<i32>::new()), "{}");
    }
}
