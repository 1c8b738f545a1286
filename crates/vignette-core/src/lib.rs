pub mod classify;
pub mod constants;
pub mod entity;
pub mod hover;
pub mod pick;
pub mod pulse;
pub mod scene;
pub mod state;

pub use classify::*;
pub use entity::*;
pub use hover::*;
pub use pick::*;
pub use pulse::*;
pub use scene::*;
pub use state::*;
