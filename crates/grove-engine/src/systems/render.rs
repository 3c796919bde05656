use glam::Vec2;

use crate::components::entity::Entity;
use crate::components::sprite::Image;
use crate::renderer::camera::FollowCamera;
use crate::renderer::instance::{DrawInstance, DrawList};
use crate::renderer::traits::Surface;

/// Static background drawn under every entity.
#[derive(Debug, Clone, Copy)]
pub struct Floor {
    pub image: Image,
    /// World position of the floor's top-left corner.
    pub pos: Vec2,
}

/// Build the draw list for one frame: the floor first, then every active entity
/// with an image, sorted by ascending vertical center.
///
/// The sort is stable and runs in full each frame, so entities at equal depth
/// keep insertion order.
pub fn build_draw_list<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    floor: Option<&Floor>,
    camera: &FollowCamera,
    list: &mut DrawList,
) {
    list.clear();

    if let Some(floor) = floor {
        list.push(DrawInstance::new(&floor.image, camera.to_screen(floor.pos)));
    }

    let mut visible: Vec<(&Entity, &Image)> = entities
        .filter(|e| e.active)
        .filter_map(|e| e.image.as_ref().map(|img| (e, img)))
        .collect();
    visible.sort_by(|(a, _), (b, _)| a.rect.center_y().total_cmp(&b.rect.center_y()));

    for (entity, image) in visible {
        list.push(DrawInstance::new(image, camera.to_screen(entity.rect.top_left())));
    }
}

/// Submit a draw list to the platform surface, in order.
pub fn present(list: &DrawList, surface: &mut dyn Surface) {
    for instance in &list.instances {
        surface.blit(&instance.image(), instance.pos());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::entity::EntityKind;
    use crate::components::rect::Rect;
    use crate::components::sprite::TextureId;
    use crate::components::tile::TileKind;

    fn sprite(id: u32, y: f32, h: f32) -> Entity {
        Entity::new(EntityId(id), EntityKind::Tile(TileKind::Object))
            .with_rect(Rect::new(0.0, y, 64.0, h))
            .with_image(Image::new(TextureId(id), 64.0, h))
    }

    #[test]
    fn entities_draw_back_to_front_by_center_y() {
        let entities = vec![
            sprite(1, 300.0, 64.0),  // center 332
            sprite(2, 100.0, 64.0),  // center 132
            sprite(3, 200.0, 200.0), // center 300
            sprite(4, 100.0, 64.0),  // center 132, after 2
        ];
        let cam = FollowCamera::new(Vec2::ZERO);
        let mut list = DrawList::new();
        build_draw_list(entities.iter(), None, &cam, &mut list);

        let order: Vec<u32> = list.instances.iter().map(|i| i.texture).collect();
        assert_eq!(order, vec![2, 4, 3, 1]);
    }

    #[test]
    fn floor_first_and_everything_offset_by_camera() {
        let floor = Floor {
            image: Image::new(TextureId(99), 1000.0, 1000.0),
            pos: Vec2::ZERO,
        };
        let entities = vec![sprite(1, 500.0, 64.0)];
        let mut cam = FollowCamera::new(Vec2::new(100.0, 50.0));
        cam.look_at(Vec2::new(300.0, 400.0)); // offset (200, 350)

        let mut list = DrawList::new();
        build_draw_list(entities.iter(), Some(&floor), &cam, &mut list);

        assert_eq!(list.len(), 2);
        assert_eq!(list.instances[0].texture, 99);
        assert_eq!(list.instances[0].pos(), Vec2::new(-200.0, -350.0));
        assert_eq!(list.instances[1].pos(), Vec2::new(-200.0, 150.0));
    }

    #[test]
    fn inactive_and_imageless_entities_are_skipped() {
        let mut hidden = sprite(1, 0.0, 64.0);
        hidden.active = false;
        let bare = Entity::new(EntityId(2), EntityKind::Tile(TileKind::Boundary));
        let entities = vec![hidden, bare, sprite(3, 0.0, 64.0)];

        let mut list = DrawList::new();
        build_draw_list(entities.iter(), None, &FollowCamera::new(Vec2::ZERO), &mut list);
        assert_eq!(list.len(), 1);
        assert_eq!(list.instances[0].texture, 3);
    }

    #[test]
    fn present_blits_in_list_order() {
        struct Recorder(Vec<(u32, Vec2)>);
        impl Surface for Recorder {
            fn blit(&mut self, image: &Image, pos: Vec2) {
                self.0.push((image.texture.0, pos));
            }
        }

        let mut list = DrawList::new();
        list.push(DrawInstance::new(&Image::new(TextureId(5), 1.0, 1.0), Vec2::new(1.0, 1.0)));
        list.push(DrawInstance::new(&Image::new(TextureId(6), 1.0, 1.0), Vec2::new(2.0, 2.0)));

        let mut surface = Recorder(Vec::new());
        present(&list, &mut surface);
        assert_eq!(surface.0, vec![(5, Vec2::new(1.0, 1.0)), (6, Vec2::new(2.0, 2.0))]);
    }
}
