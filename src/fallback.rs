//! Bundled catalog used when the backend is unreachable.
//!
//! The same three entries the reference backend seeds an empty database
//! with, so an offline client and a freshly seeded server agree.

use crate::entry::{Category, Entry, Rarity, Vec3};

/// The static dataset served by `load_all` when the remote fetch fails, and
/// used to seed an empty local store.
pub fn bundled_entries() -> Vec<Entry> {
    vec![
        Entry {
            id: "1".to_string(),
            name: "Pig".to_string(),
            category: Category::Passive,
            health: 10.0,
            damage: "0 (None)".to_string(),
            behavior: "Follows Player if player holds a carrot".to_string(),
            habitat: "Everywhere".to_string(),
            drops: vec!["Pork Chops".to_string(), "Raw Porkchop".to_string()],
            rarity: Rarity::Common,
            description: "A pig is a passive mob found commonly in most grass biomes. \
                They can be bred using carrots, potatoes, or beetroots, and can be \
                equipped with a saddle to ride."
                .to_string(),
            model: "/uploads/models/pig.glb".to_string(),
            image: "/uploads/images/pig.png".to_string(),
            banner: "/uploads/banners/pig_banner.png".to_string(),
            sound: "/uploads/sounds/pig.mp3".to_string(),
            scale: 0.75,
            position: Vec3::new(0.0, -3.0, 0.0),
            rotation: Vec3::default(),
            weaknesses: vec![
                "Fall damage".to_string(),
                "Environmental hazards".to_string(),
                "Zombies".to_string(),
            ],
            abilities: vec![
                "Can be ridden with saddle".to_string(),
                "Can be bred".to_string(),
                "Eats crops".to_string(),
            ],
            created_at: None,
            updated_at: None,
            is_playing_sound: false,
        },
        Entry {
            id: "2".to_string(),
            name: "Creeper".to_string(),
            category: Category::Hostile,
            health: 20.0,
            damage: "49 (Explosion)".to_string(),
            behavior: "Sneaks up on players and explodes".to_string(),
            habitat: "Overworld, Dark areas".to_string(),
            drops: vec!["Gunpowder".to_string(), "Music Disc (rare)".to_string()],
            rarity: Rarity::Common,
            description: "A hostile mob that silently approaches players and explodes, \
                causing massive damage to players and the environment. Known for its \
                distinctive green pixelated appearance and hissing sound before \
                detonation."
                .to_string(),
            model: "/uploads/models/creeper.glb".to_string(),
            image: "/uploads/images/creeper.png".to_string(),
            banner: "/uploads/banners/creeper_banner.png".to_string(),
            sound: "/uploads/sounds/creeper.mp3".to_string(),
            scale: 0.8,
            position: Vec3::new(0.0, -10.0, 0.0),
            rotation: Vec3::new(0.0, 180.0, 0.0),
            weaknesses: vec![
                "Cats".to_string(),
                "Ranged attacks".to_string(),
                "Skeletons".to_string(),
            ],
            abilities: vec![
                "Explosion".to_string(),
                "Silent movement".to_string(),
                "Charged variant in thunderstorms".to_string(),
            ],
            created_at: None,
            updated_at: None,
            is_playing_sound: false,
        },
        Entry {
            id: "3".to_string(),
            name: "Enderman".to_string(),
            category: Category::Neutral,
            health: 40.0,
            damage: "7 per hit".to_string(),
            behavior: "Teleports when attacked or when looked at in the eyes".to_string(),
            habitat: "The End, Nighttime Overworld".to_string(),
            drops: vec!["Ender Pearl".to_string(), "End Stone (carried)".to_string()],
            rarity: Rarity::Uncommon,
            description: "A tall, dark mob that can teleport and pick up blocks. \
                Becomes hostile when players look directly at its face. Known for its \
                deep vocal sounds and ability to traverse dimensions."
                .to_string(),
            model: "/uploads/models/enderman.glb".to_string(),
            image: "/uploads/images/enderman.png".to_string(),
            banner: "/uploads/banners/enderman_banner.png".to_string(),
            sound: "/uploads/sounds/enderman.mp3".to_string(),
            scale: 0.65,
            position: Vec3::new(0.0, 7.5, 0.0),
            rotation: Vec3::default(),
            weaknesses: vec![
                "Water".to_string(),
                "Rain".to_string(),
                "Small spaces".to_string(),
            ],
            abilities: vec![
                "Teleportation".to_string(),
                "Block carrying".to_string(),
                "Damage resistance".to_string(),
            ],
            created_at: None,
            updated_at: None,
            is_playing_sound: false,
        },
    ]
}
