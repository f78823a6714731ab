// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// File formats that don't belong to the pipeline itself:
//
//   dataset_store.rs - writes the Dataset to a versioned
//                      MessagePack artifact (temp file, then
//                      rename) and reads it back.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// MessagePack persistence for the labeled-examples Dataset
pub mod dataset_store;
