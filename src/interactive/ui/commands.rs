use crate::interactive::domain::models::SearchRequest;
use crate::schemas::Movie;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ScheduleDebounce(u64), // delay in milliseconds
    ExecuteSearch(SearchRequest),
    ReportSearch { query: String, movie: Movie },
    LoadTrending,
    ScheduleClearMessage(u64), // delay in milliseconds
    Batch(Vec<Command>),
}

impl Command {
    /// Flatten nested batches and drop no-ops
    pub fn into_vec(self) -> Vec<Command> {
        match self {
            Command::None => Vec::new(),
            Command::Batch(commands) => commands.into_iter().flat_map(Command::into_vec).collect(),
            other => vec![other],
        }
    }
}
