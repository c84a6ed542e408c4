pub mod crystalizer;
