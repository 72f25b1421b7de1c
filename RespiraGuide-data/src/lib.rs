// RespiraGuide Data
// This crate holds the log sink the classifier writes its entries to

// Log sink trait and implementations
pub mod repository;

// Stored record models
pub mod models;
