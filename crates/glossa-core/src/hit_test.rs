use glossa_types::{PagePoint, Word};

/// First word, in sequence order, whose box contains `point`.
///
/// Boxes are closed on all four edges. When boxes overlap the earlier word
/// wins, so the result only depends on the order of `words`.
pub fn locate(words: &[Word], point: PagePoint) -> Option<&Word> {
    words.iter().find(|word| word.bbox.contains(point))
}

#[cfg(test)]
mod tests {
    use glossa_types::BoundingBox;

    use super::*;

    fn hello_world() -> Vec<Word> {
        vec![
            Word::new(BoundingBox::new(10.0, 10.0, 30.0, 20.0), "Hello"),
            Word::new(BoundingBox::new(40.0, 10.0, 60.0, 20.0), "World"),
        ]
    }

    #[test]
    fn test_example_page() {
        let words = hello_world();

        let hit = locate(&words, PagePoint::new(15.0, 15.0));
        assert_eq!(hit.map(|w| w.text.as_str()), Some("Hello"));

        assert!(locate(&words, PagePoint::new(35.0, 15.0)).is_none());

        let hit = locate(&words, PagePoint::new(45.0, 15.0));
        assert_eq!(hit.map(|w| w.text.as_str()), Some("World"));
    }

    #[test]
    fn test_edges_are_inclusive() {
        let words = hello_world();

        for point in [
            PagePoint::new(10.0, 10.0),
            PagePoint::new(30.0, 20.0),
            PagePoint::new(30.0, 10.0),
            PagePoint::new(10.0, 20.0),
        ] {
            let hit = locate(&words, point);
            assert_eq!(hit.map(|w| w.text.as_str()), Some("Hello"), "{point:?}");
        }
    }

    #[test]
    fn test_overlap_first_in_sequence_wins() {
        let words = vec![
            Word::new(BoundingBox::new(0.0, 0.0, 50.0, 50.0), "outer"),
            Word::new(BoundingBox::new(10.0, 10.0, 20.0, 20.0), "inner"),
        ];
        let hit = locate(&words, PagePoint::new(15.0, 15.0));
        assert_eq!(hit.map(|w| w.text.as_str()), Some("outer"));

        let reversed: Vec<Word> = words.into_iter().rev().collect();
        let hit = locate(&reversed, PagePoint::new(15.0, 15.0));
        assert_eq!(hit.map(|w| w.text.as_str()), Some("inner"));
    }

    #[test]
    fn test_empty_page_never_hits() {
        assert!(locate(&[], PagePoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_every_interior_point_resolves_to_owner_or_earlier() {
        let words = vec![
            Word::new(BoundingBox::new(0.0, 0.0, 40.0, 10.0), "a"),
            Word::new(BoundingBox::new(30.0, 5.0, 70.0, 15.0), "b"),
            Word::new(BoundingBox::new(80.0, 0.0, 100.0, 10.0), "c"),
        ];

        for (idx, word) in words.iter().enumerate() {
            let b = word.bbox;
            for i in 1..10 {
                for j in 1..10 {
                    let point = PagePoint::new(
                        b.x0 + b.width() * i as f32 / 10.0,
                        b.y0 + b.height() * j as f32 / 10.0,
                    );
                    let hit = locate(&words, point).expect("interior point must hit");
                    let hit_idx = words.iter().position(|w| w == hit).unwrap();
                    assert!(hit_idx <= idx);
                    assert!(hit.bbox.contains(point));
                }
            }
        }
    }

    #[test]
    fn test_points_outside_all_boxes_miss() {
        let words = hello_world();
        for point in [
            PagePoint::new(5.0, 15.0),
            PagePoint::new(35.0, 15.0),
            PagePoint::new(65.0, 15.0),
            PagePoint::new(20.0, 9.0),
            PagePoint::new(50.0, 21.0),
        ] {
            assert!(locate(&words, point).is_none(), "{point:?}");
        }
    }
}
