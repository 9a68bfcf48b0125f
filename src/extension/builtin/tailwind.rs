//! Tailwind CSS build plugin handle.
//!
//! The stylesheet transform itself runs in the host's asset pipeline; this
//! handle only carries the name and the hooks it subscribes to.

use crate::extension::{Extension, Hook};

const HOOKS: &[Hook] = &[Hook::BuildStart, Hook::Transform];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TailwindPlugin;

impl Extension for TailwindPlugin {
    fn name(&self) -> &str {
        "tailwindcss"
    }

    fn hooks(&self) -> &[Hook] {
        HOOKS
    }
}
