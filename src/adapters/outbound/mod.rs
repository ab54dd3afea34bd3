pub mod documents;
pub mod gateway;
pub mod persistence;
pub mod storage;
