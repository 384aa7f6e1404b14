//! Built-in word list for passphrase generation.

/// Short, distinct, lowercase English words.
pub const WORDS: &[&str] = &[
    "acid", "acorn", "actor", "adapt", "agent", "agile", "album", "alert",
    "alley", "amber", "amend", "angle", "ankle", "apple", "april", "apron",
    "arena", "argue", "armor", "arrow", "aspen", "atlas", "attic", "audio",
    "autumn", "avid", "bacon", "badge", "bagel", "baker", "bamboo", "banjo",
    "barn", "basil", "basin", "batch", "beach", "beard", "bench", "berry",
    "bison", "blade", "blaze", "bloom", "board", "bonus", "boost", "brave",
    "bread", "brick", "bride", "broom", "brush", "bucket", "buddy", "bugle",
    "cabin", "cable", "cactus", "camel", "canal", "candy", "canoe", "canvas",
    "cargo", "carpet", "castle", "cedar", "chalk", "charm", "cherry", "chess",
    "chief", "cider", "cinema", "civic", "claim", "clay", "cliff", "clock",
    "cloud", "clover", "coach", "cobra", "cocoa", "comet", "coral", "couch",
    "crane", "crater", "crisp", "crown", "cube", "cycle", "daisy", "dance",
    "delta", "denim", "depot", "desert", "dial", "diary", "dingo", "disco",
    "dock", "dolphin", "donut", "dove", "dragon", "drift", "drum", "eagle",
    "easel", "echo", "elbow", "elder", "ember", "empire", "engine", "epic",
    "equal", "fable", "falcon", "fancy", "feast", "fern", "ferry", "fiber",
    "field", "fig", "flame", "flask", "fleet", "flint", "flute", "focus",
    "forest", "fossil", "frame", "frost", "fudge", "galaxy", "garden", "garlic",
    "gecko", "gem", "giant", "ginger", "glacier", "glide", "globe", "gold",
    "grape", "gravel", "guitar", "habit", "harbor", "harp", "hazel", "helmet",
    "heron", "hobby", "honey", "hotel", "hover", "igloo", "index", "ink",
    "island", "ivory", "jacket", "jaguar", "jelly", "jewel", "jigsaw", "jockey",
    "judge", "juice", "jungle", "kayak", "kettle", "kiosk", "kite", "koala",
    "ladder", "lagoon", "lantern", "laptop", "lemon", "lens", "lily", "linen",
    "lizard", "lobby", "lotus", "lunar", "magnet", "mango", "maple", "marble",
    "meadow", "melon", "mint", "mirror", "mocha", "modem", "moose", "mosaic",
    "motor", "nectar", "needle", "nest", "noble", "nomad", "novel", "oak",
    "oasis", "ocean", "olive", "onion", "opera", "orbit", "orchid", "otter",
    "oven", "paddle", "panda", "paper", "parade", "peach", "pebble", "pepper",
    "piano", "pilot", "pixel", "plaza", "plum", "polar", "pony", "puzzle",
    "quail", "quartz", "quiet", "quilt", "radar", "raven", "reef", "ribbon",
    "rider", "river", "robin", "rocket", "rose", "ruby", "saddle", "salad",
    "salmon", "satin", "scarf", "shadow", "shell", "silver", "sketch", "sled",
    "slope", "solar", "spice", "spiral", "sprout", "squid", "stone", "storm",
    "sugar", "summit", "swan", "syrup", "table", "tango", "tiger", "timber",
    "toast", "tonic", "topaz", "torch", "tower", "tulip", "tundra", "turtle",
    "umbrella", "unicorn", "urban", "valley", "velvet", "violin", "vivid", "voyage",
    "wafer", "walnut", "willow", "window", "winter", "wizard", "wool", "yacht",
    "yarn", "yeti", "zebra", "zenith", "zinc",
];
