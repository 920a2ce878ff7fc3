oxc_index::define_index_type! {
  pub struct ModuleIdx = u32;
}

oxc_index::define_index_type! {
  pub struct ChunkIdx = u32;
}
