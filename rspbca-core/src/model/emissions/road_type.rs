/// VDF classes modeled as unrestricted-access roads
const UNRESTRICTED_VDFS: [i64; 2] = [1, 6];
/// first rural area type
const RURAL_AREA_TYPE: i64 = 9;

/// MOVES roadTypeID from the link's VDF and area type:
///
/// | access       | urban (atype < 9) | rural (atype >= 9) |
/// |--------------|-------------------|--------------------|
/// | unrestricted | 5                 | 3                  |
/// | restricted   | 4                 | 2                  |
pub fn road_type_id(vdf: i64, area_type: i64) -> i64 {
    let unrestricted = UNRESTRICTED_VDFS.contains(&vdf);
    let rural = area_type >= RURAL_AREA_TYPE;
    match (unrestricted, rural) {
        (true, false) => 5,
        (true, true) => 3,
        (false, false) => 4,
        (false, true) => 2,
    }
}

#[cfg(test)]
mod test {
    use super::road_type_id;

    #[test]
    fn test_road_types() {
        assert_eq!(road_type_id(1, 5), 5);
        assert_eq!(road_type_id(6, 8), 5);
        assert_eq!(road_type_id(1, 9), 3);
        assert_eq!(road_type_id(2, 1), 4);
        assert_eq!(road_type_id(4, 10), 2);
    }
}
