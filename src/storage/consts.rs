pub const SESSION_ID_LENGTH: usize = 10;
