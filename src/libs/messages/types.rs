#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    LoginSucceeded,
    LoginTokenRejected,
    LoggedOut,
    NotLoggedIn,
    SessionExpired,
    PromptAccessToken,

    // === TASK MESSAGES ===
    TaskCreated(String),   // title
    TaskUpdated(String),   // title
    TaskCompleted(String), // title
    TaskReopened(String),  // title
    TaskDeleted(i64),      // id
    TasksEmpty,
    TasksHeader,
    TaskNotInList(i64), // id
    NoChangesDetected,

    // === SYNC FAILURE BANNERS ===
    TasksLoadFailed,
    TaskCreateFailed,
    TaskUpdateFailed,
    TaskDeleteFailed,
    TaskAlreadyDeleted,
    TaskDeleteForbidden,
    CriticalError,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigSaveError,
    ConfigNotInitialized,
    ConfigModuleServer,
    PromptApiUrl,
}
