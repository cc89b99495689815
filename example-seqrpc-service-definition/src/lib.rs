mod add;
mod echo;
mod ping;

pub use add::{Add, AddArgs, AddResult};
pub use echo::{Echo, EchoArgs, EchoResult};
pub use ping::{Ping, PingArgs, PingResult};
