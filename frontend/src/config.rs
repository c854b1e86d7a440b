use shared::BirthDatePolicy;

pub struct Config;

impl Config {
    /// The date-of-birth range offered by the form's picker.
    ///
    /// A deployment wanting a different window changes it here; the
    /// component also accepts any policy directly through its props.
    pub fn birth_date_policy() -> BirthDatePolicy {
        BirthDatePolicy::default()
    }
}
