//! Declarative constraint annotations.
//!
//! `annotate!` attaches a table of field constraints to a struct. The table is
//! built once, on first use, and walked by
//! [`validate_annotated`](crate::validators::annotated::validate_annotated).

/// Attach field constraints to a struct.
///
/// Fields are listed in the order their failures should be reported. Each
/// entry names the constraint, its failure message, the struct field and the
/// path the failure is reported under. Field types must implement
/// [`Reflect`](crate::validators::annotated::Reflect).
///
/// Supported constraints:
/// - `not_empty`: value must be present and have a non-zero length
/// - `birth_date`: value must be a plausible date of birth
///
/// # Example
///
/// ```rust,ignore
/// use fieldcheck_core::annotate;
///
/// struct Signup {
///     name: Option<String>,
/// }
///
/// annotate! {
///     Signup {
///         #[not_empty(message = "Name is empty.")]
///         name as "name",
///     }
/// }
/// ```
#[macro_export]
macro_rules! annotate {
    ($type:ty {
        $(
            #[$constraint:ident(message = $message:expr)]
            $field:ident as $path:expr
        ),* $(,)?
    }) => {
        impl $crate::validators::annotated::Annotated for $type {
            fn field_specs() -> &'static [$crate::validators::annotated::FieldSpec<Self>] {
                static SPECS: ::std::sync::LazyLock<
                    ::std::vec::Vec<$crate::validators::annotated::FieldSpec<$type>>,
                > = ::std::sync::LazyLock::new(|| {
                    ::std::vec![
                        $(
                            $crate::validators::annotated::FieldSpec {
                                name: $path,
                                message: $message,
                                constraint: $crate::__annotate_constraint!($constraint),
                                accessor: |value: &$type| {
                                    $crate::validators::annotated::Reflect::reflect(&value.$field)
                                },
                            }
                        ),*
                    ]
                });
                &SPECS
            }
        }
    };
}

/// Internal macro mapping a constraint name to its descriptor.
#[doc(hidden)]
#[macro_export]
macro_rules! __annotate_constraint {
    (not_empty) => {
        $crate::validators::annotated::Constraint::NotEmpty
    };
    (birth_date) => {
        $crate::validators::annotated::Constraint::BirthDate
    };
    ($other:ident) => {
        ::std::compile_error!(::std::concat!(
            "unknown constraint `",
            ::std::stringify!($other),
            "`"
        ))
    };
}

/// Bail early if errors exist.
///
/// # Example
///
/// ```rust,ignore
/// use fieldcheck_core::bail_if_errors;
/// use fieldcheck_core::validation::{ValidationErrors, ValidationResult};
///
/// fn validate() -> ValidationResult<()> {
///     let mut errors = ValidationErrors::new();
///     errors.add_required("name");
///
///     bail_if_errors!(errors); // Returns early if errors exist
///
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! bail_if_errors {
    ($errors:expr) => {
        if !$errors.is_empty() {
            return Err($errors);
        }
    };
}
