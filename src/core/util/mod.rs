pub mod pixel_to_plane_point;
