mod failing_sink;
mod git_stub;
mod working_dir_stub;

pub use failing_sink::FailingSink;
pub use git_stub::StubGit;
pub use working_dir_stub::StubWorkingDir;
