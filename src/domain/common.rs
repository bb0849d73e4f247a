use uuid::Uuid;

use super::coerce::Total;

/// Identifies records that expose the id of the entry they were projected from.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides access to a human-friendly record name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Records carrying a single headline amount.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Sums the headline amounts of `items`.
pub fn total_amount<T: Amounted>(items: &[T]) -> f64 {
    items.iter().map(Amounted::amount).total()
}

/// Implements [`Identifiable`] and [`NamedEntity`] for records with `id` and `name` fields.
#[macro_export]
macro_rules! impl_record_identity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::domain::Identifiable for $ty {
                fn id(&self) -> ::uuid::Uuid {
                    self.id
                }
            }

            impl $crate::domain::NamedEntity for $ty {
                fn name(&self) -> &str {
                    &self.name
                }
            }
        )+
    };
}
