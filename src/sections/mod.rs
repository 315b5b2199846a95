// Landing page sections
// Developed with ⚡ by the stackling team (c)2026

/// Version string used across the site (single source of truth)
pub const VERSION: &str = "v2.0.1";

/// Canonical outbound links.
pub const GITHUB_URL: &str = "https://github.com/stackling/stackling";
pub const NPM_URL: &str = "https://www.npmjs.com/package/stackling";

/// The one-liner that scaffolds a project.
pub const SCAFFOLD_COMMAND: &str = "npx stackling";

mod code_block;
mod easter_eggs;
mod features;
mod footer;
mod getting_started;
mod hero;
mod nav;
mod stack;
mod structure;

pub use code_block::CodeBlock;
pub use easter_eggs::EasterEggs;
pub use features::Features;
pub use footer::Footer;
pub use getting_started::GettingStarted;
pub use hero::Hero;
pub use nav::Nav;
pub use stack::StackSection;
pub use structure::StructureSelector;
