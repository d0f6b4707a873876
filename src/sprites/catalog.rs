use super::models::sprite_spec::SpriteSpec;

// Shared style preamble so every sprite reads as one asset set.
static STYLE: &str = "64x64 pixel art sprite for a retro virtual pet game, \
chunky 16-bit style with a clean black outline, bright saturated colors, \
subject centered on a plain white background, no text, no watermark.";

fn sprite(name: &str, filename: &str, subject: &str) -> SpriteSpec {
    SpriteSpec {
        name: name.to_string(),
        filename: filename.to_string(),
        prompt: [STYLE, " ", subject].concat(),
    }
}

lazy_static! {
    pub static ref SPRITE_CATALOG: Vec<SpriteSpec> = vec![
        sprite(
            "egg",
            "egg-new.png",
            "A pale cream egg with mint green speckles, sitting upright with a \
             slight tilt and a small soft shadow under its base.",
        ),
        sprite(
            "egg-cracked",
            "egg-cracked-new.png",
            "The same pale cream egg with a jagged crack running across the \
             middle, two shell chips flying off, and a hint of warm yellow \
             light glowing through the crack.",
        ),
        sprite(
            "hatchling",
            "hatchling-new.png",
            "A tiny round mint-green blob creature sitting in the bottom half \
             of a broken eggshell, big curious black eyes, wearing a shell \
             piece on its head like a hat.",
        ),
        sprite(
            "pet-idle",
            "pet-idle-new.png",
            "A small round blue creature with stubby arms and little feet, \
             standing and facing forward with a calm open-mouth smile.",
        ),
        sprite(
            "pet-happy",
            "pet-happy-new.png",
            "The same small round blue creature mid-jump with both arms \
             raised, eyes squeezed shut in a big grin, three yellow sparkles \
             around its head.",
        ),
        sprite(
            "pet-sad",
            "pet-sad-new.png",
            "The same small round blue creature slumped forward with droopy \
             ears, watery eyes and a single large tear, a tiny gray rain \
             cloud hovering above it.",
        ),
        sprite(
            "pet-sleeping",
            "pet-sleeping-new.png",
            "The same small round blue creature curled up asleep on a tiny \
             red pillow, eyes closed, one round dream bubble floating above \
             its head.",
        ),
        sprite(
            "heart",
            "heart-new.png",
            "A glossy red heart with a white shine spot in the top-left lobe, \
             floating slightly with two tiny pink sparkles beside it.",
        ),
        sprite(
            "apple",
            "apple-new.png",
            "A shiny red apple with a single green leaf on a short brown \
             stem and a bright highlight on its left side, drawn as a food \
             item icon.",
        ),
        sprite(
            "cookie",
            "cookie-new.png",
            "A golden-brown chocolate chip cookie with five dark chips and \
             one crumb breaking off the lower edge, drawn as a food item \
             icon.",
        ),
        sprite(
            "poop",
            "poop-new.png",
            "A cartoon swirl of brown poop with two wavy stink lines rising \
             above it, drawn cheerful and rounded rather than gross.",
        ),
        sprite(
            "tombstone",
            "tombstone-new.png",
            "A rounded gray stone tablet with a chipped top corner, a simple \
             engraved cross, and a small tuft of green grass at its base.",
        ),
        sprite(
            "star",
            "star-new.png",
            "A five-pointed golden star with a darker orange outline and one \
             small white glint near its upper point, drawn as a reward icon.",
        ),
        sprite(
            "sparkle",
            "sparkle-new.png",
            "A four-pointed white sparkle burst with small diamond-shaped \
             glints at each tip over a faint pale blue glow, drawn as an \
             effect overlay icon.",
        ),
    ];
}
