// Application layer: turns engine output into something a caller can display.

pub mod report;
