/*!
Configuration of a session.

All configuration for a session is contained within a [Config], which is given to the session when the session is created and is not changed after.

```rust
# use equal_path::config::{Config, LengthOrder, Search};
let mut config = Config::default();
assert_eq!(config.search.value, Search::Global);

config.search.value = Search::Separate;
config.order.value = LengthOrder::Descending;

// Bounds are respected when setting through an option.
assert!(!config.formula_limit.set(0));
assert!(config.formula_limit.set(1_000));
assert_eq!(config.formula_limit.value, 1_000);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod search;
pub use search::{LengthOrder, Search};

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to decide over all lengths at once, or each length separately.
    pub search: ConfigOption<Search>,

    /// The order of lengths, when deciding each length separately.
    pub order: ConfigOption<LengthOrder>,

    /// When deciding each length separately, whether to continue past the first length with a witness.
    pub exhaustive: ConfigOption<bool>,

    /// When deciding over all lengths at once, whether to first remove lengths which are unsatisfiable on their own.
    pub prefilter: ConfigOption<bool>,

    /// The (estimated) number of nodes above which a formula is not built.
    pub formula_limit: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search: ConfigOption {
                name: "search",
                min: Search::MIN,
                max: Search::MAX,
                value: Search::Global,
            },

            order: ConfigOption {
                name: "order",
                min: LengthOrder::MIN,
                max: LengthOrder::MAX,
                value: LengthOrder::Ascending,
            },

            exhaustive: ConfigOption {
                name: "exhaustive",
                min: false,
                max: true,
                value: false,
            },

            prefilter: ConfigOption {
                name: "prefilter",
                min: false,
                max: true,
                value: false,
            },

            formula_limit: ConfigOption {
                name: "formula_limit",
                min: 1,
                max: usize::MAX,
                value: 50_000_000,
            },
        }
    }
}
