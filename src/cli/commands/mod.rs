//! One module per subcommand, each exposing `execute`.

pub mod add;
pub mod change_password;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod generate;
pub mod get;
pub mod info;
pub mod init;
pub mod list;
pub mod passphrase;
pub mod strength;
