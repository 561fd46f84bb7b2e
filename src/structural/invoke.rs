//! Calling a method on every element.

use crate::UnderbarError;
use crate::collection::Collection;
use crate::sequence::map;

/// Calls `method(element, arguments)` on every element and collects the
/// results in enumeration order.
///
/// The same `arguments` are passed to every call.
///
/// # Examples
///
/// ```rust
/// use underbar::structural::invoke;
///
/// let excited = invoke(&["hi", "bye"], |word, suffix: &str| format!("{word}{suffix}"), "!");
/// assert_eq!(excited, vec!["hi!", "bye!"]);
/// ```
pub fn invoke<'a, C, A, R, F>(collection: &'a C, mut method: F, arguments: &A) -> Vec<R>
where
    C: Collection + ?Sized + 'a,
    A: ?Sized,
    F: FnMut(&'a C::Item, &A) -> R,
{
    map(collection, |element, _| method(element, arguments))
}

/// A type whose methods can be looked up by name at run time.
///
/// Implement this for element types that should work with [`invoke_named`].
pub trait Invocable<A: ?Sized = ()> {
    /// The result of a named method.
    type Output;

    /// Runs the method called `name` with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`UnderbarError::UnknownMethod`] when the receiver has no
    /// method called `name`.
    fn invoke_method(&self, name: &str, arguments: &A) -> Result<Self::Output, UnderbarError>;
}

fn invoke_text_method(receiver: &'static str, text: &str, name: &str) -> Result<String, UnderbarError> {
    match name {
        "to_uppercase" => Ok(text.to_uppercase()),
        "to_lowercase" => Ok(text.to_lowercase()),
        "trim" => Ok(text.trim().to_owned()),
        _ => Err(UnderbarError::UnknownMethod {
            receiver,
            method: name.to_owned(),
        }),
    }
}

impl Invocable for str {
    type Output = String;

    fn invoke_method(&self, name: &str, (): &()) -> Result<String, UnderbarError> {
        invoke_text_method("str", self, name)
    }
}

impl Invocable for &str {
    type Output = String;

    fn invoke_method(&self, name: &str, (): &()) -> Result<String, UnderbarError> {
        invoke_text_method("str", self, name)
    }
}

impl Invocable for String {
    type Output = String;

    fn invoke_method(&self, name: &str, (): &()) -> Result<String, UnderbarError> {
        invoke_text_method("String", self, name)
    }
}

/// Calls the method called `name` on every element.
///
/// # Errors
///
/// Stops at the first element that has no such method and returns
/// [`UnderbarError::UnknownMethod`].
///
/// # Examples
///
/// ```rust
/// use underbar::UnderbarError;
/// use underbar::structural::invoke_named;
///
/// assert_eq!(
///     invoke_named(&["moe", "larry"], "to_uppercase", &()),
///     Ok(vec!["MOE".to_string(), "LARRY".to_string()])
/// );
/// assert!(matches!(
///     invoke_named(&["moe"], "shout", &()),
///     Err(UnderbarError::UnknownMethod { .. })
/// ));
/// ```
pub fn invoke_named<C, A>(
    collection: &C,
    name: &str,
    arguments: &A,
) -> Result<Vec<<C::Item as Invocable<A>>::Output>, UnderbarError>
where
    C: Collection + ?Sized,
    C::Item: Invocable<A>,
    A: ?Sized,
{
    let mut results = Vec::with_capacity(collection.size());
    for (_, element) in collection.entries() {
        results.push(element.invoke_method(name, arguments)?);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_method_names_receiver() {
        let error = String::from("x").invoke_method("len", &()).unwrap_err();
        assert_eq!(
            error,
            UnderbarError::UnknownMethod {
                receiver: "String",
                method: "len".to_string(),
            }
        );
    }

    #[test]
    fn test_invoke_named_on_empty_collection() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(invoke_named(&empty, "trim", &()), Ok(Vec::new()));
    }
}
