//! Truthiness for predicate results and default iterators.

/// Values that can be interpreted as a boolean condition.
///
/// Predicates passed to `filter`, `reject`, `every` and `some` may return any
/// `Truthy` type, which lets the element itself serve as the predicate
/// result (see [`every_truthy`](crate::sequence::every_truthy)).
///
/// | Type | Truthy when |
/// |---|---|
/// | `bool` | `true` |
/// | integers | non-zero |
/// | floats | non-zero and not NaN |
/// | `char` | not `'\0'` |
/// | `str` / `String` | non-empty |
/// | `Option<T>` | `Some(value)` with a truthy `value` |
/// | `()` | never |
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Truthy;
///
/// assert!(1_i32.is_truthy());
/// assert!(!0.0_f64.is_truthy());
/// assert!(!f64::NAN.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(Some("x").is_truthy());
/// assert!(!Some(0_u8).is_truthy());
/// assert!(!None::<i32>.is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value counts as a satisfied condition.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

macro_rules! impl_truthy_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_for_floats {
    ($($float:ty),* $(,)?) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

impl_truthy_for_floats!(f32, f64);

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != '\0'
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
