//! Integration tests for the bilayer component

// Mixing-rule properties over random compositions
mod mixing_tests;


// Parameter enumeration, prior and configuration
mod contract_tests;
