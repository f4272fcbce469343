mod wizard;

pub use wizard::{PROMPTED_FIELDS, prompt_config, prompt_run, prompt_task};
