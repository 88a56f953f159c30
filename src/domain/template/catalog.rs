//! Built-in template registry.

use super::{ChoiceOption, Icon, ParamDef, ParamKind, Template};

/// Template selected when a session starts.
pub const DEFAULT_TEMPLATE_ID: &str = "custom_edit";

/// Quick-start background scenes, in display order.
pub const SCENE_TEMPLATE_IDS: [&str; 6] = [
    "bg_ship_luxury",
    "bg_beach_tropical",
    "bg_stadium_sports",
    "bg_neon_city",
    "bg_forest_nature",
    "background_change_marketing",
];

const CORNERS: &[ChoiceOption] = &[
    ChoiceOption { label: "Top Left", value: "top-left" },
    ChoiceOption { label: "Top Right", value: "top-right" },
    ChoiceOption { label: "Bottom Left", value: "bottom-left" },
    ChoiceOption { label: "Bottom Right", value: "bottom-right" },
];

/// All templates, in display order.
pub static TEMPLATES: &[Template] = &[
    Template {
        id: "bg_ship_luxury",
        name: "Luxury Cruise",
        description: "Inside a luxury ship with ocean views.",
        icon: Icon::Anchor,
        params: &[ParamDef {
            id: "lighting",
            label: "Lighting",
            kind: ParamKind::Choice {
                options: &[
                    ChoiceOption { label: "Golden Hour", value: "warm golden hour" },
                    ChoiceOption { label: "Bright Noon", value: "bright daylight" },
                    ChoiceOption { label: "Sunset", value: "dramatic sunset" },
                    ChoiceOption { label: "Night", value: "ambient night" },
                ],
                default: "warm golden hour",
            },
        }],
        pattern: "Replace the background with the interior of a luxury cruise ship with large windows looking out at the ocean. Lighting condition: ${lighting}. Ensure the perspective matches the subject.",
    },
    Template {
        id: "bg_beach_tropical",
        name: "Tropical Beach",
        description: "Sunny beach with turquoise water.",
        icon: Icon::Sun,
        params: &[ParamDef {
            id: "vibe",
            label: "Vibe",
            kind: ParamKind::Choice {
                options: &[
                    ChoiceOption { label: "Relaxing", value: "calm and relaxing" },
                    ChoiceOption { label: "Party", value: "vibrant beach party" },
                    ChoiceOption { label: "Wild", value: "wild tropical nature" },
                ],
                default: "calm and relaxing",
            },
        }],
        pattern: "Replace the background with a beautiful tropical beach with turquoise water and white sand. Vibe: ${vibe}. Seamlessly blend the subject into the environment.",
    },
    Template {
        id: "bg_stadium_sports",
        name: "Sports Stadium",
        description: "Crowded stadium with bright lights.",
        icon: Icon::Trophy,
        params: &[ParamDef {
            id: "crowd",
            label: "Crowd Level",
            kind: ParamKind::Choice {
                options: &[
                    ChoiceOption { label: "Packed Full", value: "packed with cheering fans" },
                    ChoiceOption { label: "Empty", value: "completely empty grandstands" },
                    ChoiceOption { label: "Blurry", value: "bokeh blurred crowd" },
                ],
                default: "packed with cheering fans",
            },
        }],
        pattern: "Replace the background with a massive sports stadium. Crowd condition: ${crowd}. Use bright stadium floodlights for illumination.",
    },
    Template {
        id: "bg_neon_city",
        name: "Neon City",
        description: "Futuristic cyberpunk city street.",
        icon: Icon::Zap,
        params: &[ParamDef {
            id: "color_theme",
            label: "Color Theme",
            kind: ParamKind::Choice {
                options: &[
                    ChoiceOption { label: "Pink & Blue", value: "pink and blue neon lights" },
                    ChoiceOption { label: "Green & Gold", value: "matrix green and gold lights" },
                    ChoiceOption { label: "Red & Black", value: "intense red and black" },
                ],
                default: "pink and blue neon lights",
            },
        }],
        pattern: "Replace the background with a futuristic cyberpunk city street at night. Color theme: ${color_theme}. Add reflections and glow to match the subject.",
    },
    Template {
        id: "bg_forest_nature",
        name: "Mystic Forest",
        description: "Enchanted forest with soft light.",
        icon: Icon::Mountain,
        params: &[ParamDef {
            id: "season",
            label: "Season",
            kind: ParamKind::Choice {
                options: &[
                    ChoiceOption { label: "Summer", value: "green lush summer" },
                    ChoiceOption { label: "Autumn", value: "orange autumn leaves" },
                    ChoiceOption { label: "Winter", value: "snowy winter" },
                    ChoiceOption { label: "Fantasy", value: "glowing fantasy bio-luminescence" },
                ],
                default: "green lush summer",
            },
        }],
        pattern: "Replace the background with a deep, mystic forest. Season/Style: ${season}. Add soft rays of light filtering through the trees.",
    },
    Template {
        id: "custom_edit",
        name: "Custom Prompt",
        description: "Describe any edit you want with a text instruction.",
        icon: Icon::PenTool,
        params: &[ParamDef {
            id: "custom_instruction",
            label: "Instruction",
            kind: ParamKind::MultilineText { default: "Make the person hold a banana" },
        }],
        pattern: "Follow this image editing instruction exactly: ${custom_instruction}",
    },
    Template {
        id: "background_change_marketing",
        name: "Studio Background",
        description: "Solid colors, background removal, or watermarks.",
        icon: Icon::Palette,
        params: &[
            ParamDef {
                id: "bg_action",
                label: "Background Action",
                kind: ParamKind::Choice {
                    options: &[
                        ChoiceOption { label: "Replace with Color", value: "replace_color" },
                        ChoiceOption { label: "Keep Original", value: "keep_original" },
                    ],
                    default: "replace_color",
                },
            },
            ParamDef { id: "color", label: "Background Color", kind: ParamKind::Color { default: "#ffffff" } },
            ParamDef {
                id: "use_watermark",
                label: "Add Watermark?",
                kind: ParamKind::Choice {
                    options: &[
                        ChoiceOption { label: "No", value: "no" },
                        ChoiceOption { label: "Yes", value: "yes" },
                    ],
                    default: "no",
                },
            },
            ParamDef {
                id: "watermark_text",
                label: "Watermark Text",
                kind: ParamKind::Text { default: "TuLu Studio" },
            },
            ParamDef {
                id: "watermark_type",
                label: "Watermark Style",
                kind: ParamKind::Choice {
                    options: &[
                        ChoiceOption { label: "Brand Watermark", value: "brand logo" },
                        ChoiceOption { label: "Text Watermark", value: "simple text" },
                        ChoiceOption { label: "Pattern", value: "repeated tiled pattern" },
                        ChoiceOption { label: "Stamp", value: "official stamp" },
                    ],
                    default: "brand logo",
                },
            },
            ParamDef {
                id: "position",
                label: "Position",
                kind: ParamKind::Choice {
                    options: &[
                        ChoiceOption { label: "Bottom Right", value: "bottom-right" },
                        ChoiceOption { label: "Bottom Left", value: "bottom-left" },
                        ChoiceOption { label: "Top Right", value: "top-right" },
                        ChoiceOption { label: "Top Left", value: "top-left" },
                        ChoiceOption { label: "Center", value: "center" },
                    ],
                    default: "bottom-right",
                },
            },
            ParamDef {
                id: "opacity",
                label: "Opacity",
                kind: ParamKind::Range { min: 0.1, max: 1.0, step: 0.1, default: 0.5 },
            },
        ],
        pattern: "Perform a background edit on the image. Background Mode: ${bg_action}. If mode is 'replace_color', remove the background and replace it with hex color ${color}. If mode is 'keep_original', do not change the background. Watermark: ${use_watermark}. If Watermark is 'yes', overlay a '${watermark_type}' with text '${watermark_text}' at ${position} with ${opacity} opacity. Ensure professional quality.",
    },
    Template {
        id: "portrait_smile_retouch",
        name: "Portrait Retouch",
        description: "Enhance smiles and smooth skin naturally.",
        icon: Icon::Smile,
        params: &[
            ParamDef {
                id: "smile_intensity",
                label: "Smile Intensity",
                kind: ParamKind::Range { min: 0.0, max: 1.0, step: 0.1, default: 0.4 },
            },
            ParamDef {
                id: "smoothing",
                label: "Skin Smoothing",
                kind: ParamKind::Range { min: 0.0, max: 1.0, step: 0.1, default: 0.3 },
            },
        ],
        pattern: "Detect the primary face. Apply a subtle smile with intensity ${smile_intensity} (0-1). Apply skin smoothing of ${smoothing} (0-1). STRICTLY preserve the person's identity and facial structure.",
    },
    Template {
        id: "makeup_filter_social",
        name: "Pro Makeup",
        description: "Apply digital makeup foundation and lip tint.",
        icon: Icon::Sparkles,
        params: &[
            ParamDef {
                id: "foundation_strength",
                label: "Foundation",
                kind: ParamKind::Range { min: 0.0, max: 1.0, step: 0.1, default: 0.3 },
            },
            ParamDef { id: "lip_tint", label: "Lip Tint Color", kind: ParamKind::Color { default: "#C45A7A" } },
            ParamDef {
                id: "lashes_boost",
                label: "Lashes Boost",
                kind: ParamKind::Range { min: 0.0, max: 1.0, step: 0.1, default: 0.2 },
            },
        ],
        pattern: "Apply natural digital makeup. Foundation strength: ${foundation_strength}. Lip tint color: ${lip_tint}. Eyelash boost: ${lashes_boost}. Keep the look realistic.",
    },
    Template {
        id: "stylize_artistic",
        name: "Artistic Stylize",
        description: "Transform image into different art styles.",
        icon: Icon::Paintbrush,
        params: &[ParamDef {
            id: "style",
            label: "Art Style",
            kind: ParamKind::Choice {
                options: &[
                    ChoiceOption { label: "Watercolor", value: "watercolor" },
                    ChoiceOption { label: "Cyberpunk", value: "cyberpunk" },
                    ChoiceOption { label: "Oil Painting", value: "oil painting" },
                    ChoiceOption { label: "Sketch", value: "pencil sketch" },
                    ChoiceOption { label: "Vaporwave", value: "vaporwave" },
                ],
                default: "watercolor",
            },
        }],
        pattern: "Stylize this image in a ${style} art style. Keep the main subject recognizable but transform the texture and lighting to match the style.",
    },
    Template {
        id: "remove_object_fill",
        name: "Object Removal",
        description: "Remove objects described by text.",
        icon: Icon::Eraser,
        params: &[
            ParamDef {
                id: "object_desc",
                label: "What to remove?",
                kind: ParamKind::Text { default: "sunglasses" },
            },
            ParamDef {
                id: "fill_mode",
                label: "Fill Mode",
                kind: ParamKind::Choice {
                    options: &[
                        ChoiceOption { label: "Texture Aware", value: "texture" },
                        ChoiceOption { label: "Blur", value: "blur" },
                    ],
                    default: "texture",
                },
            },
        ],
        pattern: "Remove the ${object_desc} from the image. Inpaint the area using a ${fill_mode}-aware fill to match the surrounding background seamlessly.",
    },
    Template {
        id: "add_smiley_sticker",
        name: "Add Sticker",
        description: "Place a graphical sticker on the image.",
        icon: Icon::Sticker,
        params: &[
            ParamDef {
                id: "sticker_type",
                label: "Sticker Type",
                kind: ParamKind::Text { default: "yellow smiley face" },
            },
            ParamDef {
                id: "position",
                label: "Position",
                kind: ParamKind::Choice { options: CORNERS, default: "top-left" },
            },
            ParamDef {
                id: "scale",
                label: "Scale (%)",
                kind: ParamKind::Range { min: 5.0, max: 50.0, step: 5.0, default: 20.0 },
            },
        ],
        pattern: "Add a ${sticker_type} sticker at the ${position} of the image. Scale it to ${scale}% of the image size. Blend edges slightly and add a subtle drop shadow.",
    },
];

/// Look up a template by id.
pub fn lookup(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// The template a fresh session starts with.
pub fn default_template() -> &'static Template {
    lookup(DEFAULT_TEMPLATE_ID).unwrap_or(&TEMPLATES[0])
}

/// The quick-start scene subset, in display order.
pub fn scene_templates() -> impl Iterator<Item = &'static Template> {
    SCENE_TEMPLATE_IDS.into_iter().filter_map(|id| lookup(id))
}
