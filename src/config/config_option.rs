/// A configuration value, together with its name and bounds.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Sets the value of the option to `value`, if `value` is within bounds.
    ///
    /// Returns whether the value was set.
    pub fn set(&mut self, value: T) -> bool {
        if self.min <= value && value <= self.max {
            self.value = value;
            true
        } else {
            false
        }
    }
}
