//! Narrative content and score table for every encounter.

use super::{Branch, Grant, Outcome, Scene, SceneOption};
use crate::achievement::Achievement;
use crate::present::Tone;

const THREE_WAY: &str = "What do you do? (1/2/3): ";

pub(super) static RIDDLE: Scene = Scene {
    intro: &[
        (Tone::Narrative, "You follow the glowing light to a magical clearing."),
        (
            Tone::Narrative,
            "A wise old wizard appears, his eyes twinkling with mischief.",
        ),
        (
            Tone::Narrative,
            "He says, 'Solve my riddle to gain a magical artifact!'",
        ),
        (
            Tone::Notice,
            "Riddle: 'I speak without a mouth and hear without ears. I have no body, \
             but I come alive with wind. What am I?'",
        ),
    ],
    prompt: "Answer? (1/2/3): ",
    options: &[
        SceneOption {
            label: "Answer: A ghost.",
            branch: Branch::Fixed(RIDDLE_WRONG),
        },
        SceneOption {
            label: "Answer: An echo.",
            branch: Branch::Fixed(Outcome {
                name: "correct",
                won: true,
                delta: 50,
                lines: &[
                    "'Correct!' the wizard exclaims, handing you a glowing amulet.",
                    "The amulet pulses with power, making you feel invincible.",
                    "You thank the wizard and prepare to continue your quest.",
                ],
                grants: &[
                    Grant::Item("amulet"),
                    Grant::Achievement(Achievement::RiddleMaster),
                ],
            }),
        },
        SceneOption {
            label: "Answer: A bird.",
            branch: Branch::Fixed(RIDDLE_WRONG),
        },
    ],
};

const RIDDLE_WRONG: Outcome = Outcome {
    name: "wrong",
    won: false,
    delta: -20,
    lines: &[
        "'Wrong!' the wizard says, his voice cold. The clearing fades.",
        "Shadow creatures attack from the darkness!",
        "You barely escape, wounded and defeated. You lose!",
    ],
    grants: &[],
};

pub(super) static SQUIRREL: Scene = Scene {
    intro: &[
        (Tone::Narrative, "A friendly squirrel pops out, chattering excitedly."),
        (Tone::Narrative, "It seems to offer guidance through the forest."),
    ],
    prompt: THREE_WAY,
    options: &[
        SceneOption {
            label: "Follow the squirrel to a sunny meadow.",
            branch: Branch::Fixed(Outcome {
                name: "meadow",
                won: true,
                delta: 50,
                lines: &[
                    "The squirrel leads you to a meadow bathed in sunlight.",
                    "You find a hidden treasure chest filled with riches!",
                    "Gold coins and jewels sparkle in your hands. You win!",
                ],
                grants: &[],
            }),
        },
        SceneOption {
            label: "Head toward a creepy cave nearby.",
            branch: Branch::Fixed(Outcome {
                name: "cave",
                won: false,
                delta: -30,
                lines: &[
                    "The cave is dark, with eerie whispers echoing around.",
                    "You stumble in the darkness and fall into a deep pit.",
                    "You lose consciousness. You lose!",
                ],
                grants: &[],
            }),
        },
        SceneOption {
            label: "Decline and explore a riverbank instead.",
            branch: Branch::Fixed(Outcome {
                name: "riverbank",
                won: true,
                delta: 40,
                lines: &[
                    "At the riverbank, you find a sturdy boat waiting.",
                    "You sail down the river, arriving at a peaceful village.",
                    "The villagers welcome you warmly. You win!",
                ],
                grants: &[],
            }),
        },
    ],
};

pub(super) static MONSTER: Scene = Scene {
    intro: &[
        (Tone::Danger, "A monster bursts from the bushes, growling fiercely!"),
        (Tone::Danger, "Its eyes glow with menace as it charges toward you!"),
    ],
    prompt: THREE_WAY,
    options: &[
        SceneOption {
            label: "Fight the monster with a nearby stick.",
            branch: Branch::Random {
                first: Outcome {
                    name: "win",
                    won: true,
                    delta: 60,
                    lines: &[
                        "You swing the stick with all your might!",
                        "The monster falls, defeated by your bravery!",
                        "You find a map on the monster, leading to a castle.",
                        "At the castle, you're crowned a hero! You win!",
                    ],
                    grants: &[],
                },
                second: Outcome {
                    name: "lose",
                    won: false,
                    delta: -40,
                    lines: &[
                        "The monster overpowers you, its claws slashing.",
                        "You collapse, defeated. You lose!",
                    ],
                    grants: &[],
                },
            },
        },
        SceneOption {
            label: "Run away as fast as you can.",
            branch: Branch::Fixed(Outcome {
                name: "run",
                won: true,
                delta: 30,
                lines: &[
                    "You sprint away, heart pounding, and escape!",
                    "You stumble upon a friendly village, safe at last.",
                    "The villagers offer you shelter. You win!",
                ],
                grants: &[],
            }),
        },
        SceneOption {
            label: "Try to hide behind a tree.",
            branch: Branch::Random {
                first: Outcome {
                    name: "success",
                    won: true,
                    delta: 30,
                    lines: &[
                        "You hide silently behind the tree, holding your breath.",
                        "The monster leaves, and you find a safe path.",
                        "You reach a village and are welcomed. You win!",
                    ],
                    grants: &[],
                },
                second: Outcome {
                    name: "fail",
                    won: false,
                    delta: -30,
                    lines: &[
                        "The monster sniffs you out and attacks!",
                        "You try to flee but are overwhelmed. You lose!",
                    ],
                    grants: &[],
                },
            },
        },
    ],
};

pub(super) static FINAL_PATH: Scene = Scene {
    intro: &[
        (
            Tone::Narrative,
            "With the amulet's power, you venture deeper into the forest.",
        ),
        (Tone::Narrative, "The path splits, presenting a crucial choice:"),
    ],
    prompt: "Which path? (1/2): ",
    options: &[
        SceneOption {
            label: "A rickety bridge over a roaring river.",
            branch: Branch::Random {
                first: Outcome {
                    name: "safe",
                    won: true,
                    delta: 50,
                    lines: &[
                        "You carefully cross the bridge, which holds strong.",
                        "Beyond lies a grand kingdom, its gates open wide!",
                        "The king rewards your bravery. You win!",
                    ],
                    grants: &[],
                },
                second: Outcome {
                    name: "break",
                    won: false,
                    delta: -40,
                    lines: &[
                        "The bridge creaks and snaps beneath you!",
                        "You fall into the raging river below.",
                        "You're swept away, defeated. You lose!",
                    ],
                    grants: &[],
                },
            },
        },
        SceneOption {
            label: "A narrow trail leading to a towering mountain.",
            branch: Branch::Fixed(Outcome {
                name: "mountain",
                won: true,
                delta: 60,
                lines: &[
                    "You climb the steep trail, reaching a dragon's lair!",
                    "The dragon, awed by your amulet, bows respectfully.",
                    "It offers you a hoard of treasure. You win!",
                ],
                grants: &[],
            }),
        },
    ],
};

pub(super) static TREASURE_VAULT: Scene = Scene {
    intro: &[
        (
            Tone::Narrative,
            "You stumble upon a hidden vault, its door glowing with runes.",
        ),
        (
            Tone::Narrative,
            "A magical lock bars your entry, pulsing with energy.",
        ),
    ],
    prompt: THREE_WAY,
    options: &[
        SceneOption {
            label: "Try to pick the lock with your skills.",
            branch: Branch::Random {
                first: Outcome {
                    name: "success",
                    won: true,
                    delta: 70,
                    lines: &[
                        "Your nimble fingers unlock the vault with a click!",
                        "Inside, you find piles of gold and gems!",
                        "You're now a legend of wealth. You win!",
                    ],
                    grants: &[],
                },
                second: Outcome {
                    name: "trap",
                    won: false,
                    delta: -50,
                    lines: &[
                        "A trap springs! Darts shoot from the walls!",
                        "You're wounded and retreat in defeat. You lose!",
                    ],
                    grants: &[],
                },
            },
        },
        SceneOption {
            label: "Search the area for a hidden key.",
            branch: Branch::Fixed(Outcome {
                name: "key",
                won: true,
                delta: 60,
                lines: &[
                    "You search carefully and find a golden key hidden nearby.",
                    "The key unlocks the vault, revealing treasures galore!",
                    "You claim the riches and win!",
                ],
                grants: &[],
            }),
        },
        SceneOption {
            label: "Attempt to cast a spell to unlock it.",
            branch: Branch::Random {
                first: Outcome {
                    name: "success",
                    won: true,
                    delta: 80,
                    lines: &[
                        "Your spell glows brightly, and the lock melts away!",
                        "The vault opens, filled with magical artifacts!",
                        "You're hailed as a master mage. You win!",
                    ],
                    grants: &[],
                },
                second: Outcome {
                    name: "fail",
                    won: false,
                    delta: -40,
                    lines: &[
                        "The spell backfires, zapping you with energy!",
                        "You collapse, defeated by your own magic. You lose!",
                    ],
                    grants: &[],
                },
            },
        },
    ],
};

pub(super) static GHOSTLY: Scene = Scene {
    intro: &[
        (
            Tone::Eerie,
            "A ghostly figure materializes, its voice echoing eerily.",
        ),
        (Tone::Eerie, "It offers a challenge to prove your worth."),
    ],
    prompt: THREE_WAY,
    options: &[
        SceneOption {
            label: "Answer its cryptic question.",
            branch: Branch::Random {
                first: Outcome {
                    name: "correct",
                    won: true,
                    delta: 65,
                    lines: &[
                        "You answer wisely: 'The moon guides the lost.'",
                        "The ghost nods and grants you passage to a shrine.",
                        "You're blessed with wisdom. You win!",
                    ],
                    grants: &[],
                },
                second: Outcome {
                    name: "wrong",
                    won: false,
                    delta: -45,
                    lines: &[
                        "Your answer falters, angering the ghost!",
                        "It curses you, draining your strength. You lose!",
                    ],
                    grants: &[],
                },
            },
        },
        SceneOption {
            label: "Offer a tribute to appease it.",
            branch: Branch::Fixed(Outcome {
                name: "tribute",
                won: true,
                delta: 55,
                lines: &[
                    "You offer a shiny trinket, and the ghost accepts.",
                    "It vanishes, leaving a path to a sacred grove.",
                    "You're honored as a peacemaker. You win!",
                ],
                grants: &[],
            }),
        },
        SceneOption {
            label: "Flee from the ghostly presence.",
            branch: Branch::Random {
                first: Outcome {
                    name: "escape",
                    won: true,
                    delta: 35,
                    lines: &[
                        "You run swiftly, evading the ghost's grasp!",
                        "You find a safe haven in a nearby village.",
                        "You're safe at last. You win!",
                    ],
                    grants: &[],
                },
                second: Outcome {
                    name: "capture",
                    won: false,
                    delta: -35,
                    lines: &[
                        "The ghost catches you, its touch freezing!",
                        "You're trapped in its realm. You lose!",
                    ],
                    grants: &[],
                },
            },
        },
    ],
};
