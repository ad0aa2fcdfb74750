pub mod sets;
pub mod shell;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::collections::BTreeMap;
    }
}

pub mod prelude {
    pub use super::sets::prelude::*;
    pub use super::shell::*;
    pub use super::utils::prelude::*;
}
