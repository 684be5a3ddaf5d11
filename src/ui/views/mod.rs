pub mod loading;
pub mod quiz;
pub mod report;
pub mod upload;
