mod heading_id_prefixer;

pub use heading_id_prefixer::prefix_heading_ids;
