use super::LinkRecord;

/// highest capacity zone of the seven-county region.
pub const DEFAULT_ZONE_CEILING: i64 = 2926;

/// drops links outside of the region `[1, zone_ceiling]`, returning the
/// number of rows removed.
pub fn retain_in_region(links: &mut Vec<LinkRecord>, zone_ceiling: i64) -> usize {
    let before = links.len();
    links.retain(|link| link.is_in_region(zone_ceiling));
    let dropped = before - links.len();
    if dropped > 0 {
        log::warn!(
            "discarded {dropped} of {before} link rows with zone outside of [1, {zone_ceiling}]"
        );
    }
    dropped
}

#[cfg(test)]
mod test {
    use super::retain_in_region;
    use crate::model::network::link_record::test::mock_link;

    #[test]
    fn test_retain_in_region() {
        let mut outside = mock_link();
        outside.zone = 3000;
        let mut unzoned = mock_link();
        unzoned.zone = 0;
        let mut links = vec![mock_link(), outside, unzoned];
        let dropped = retain_in_region(&mut links, 2926);
        assert_eq!(dropped, 2);
        assert_eq!(links.len(), 1);
    }
}
