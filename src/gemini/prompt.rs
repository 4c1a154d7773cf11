//! Pure request-shaping for the generation and edit flows. Everything here
//! is deterministic over its inputs; validation happens before these are
//! called and I/O after.

use crate::models::{GeneratorState, Part};

/// Fixed technical directives appended to every generation prompt.
const QUALITY_DIRECTIVE: &str = "1. 画质：8K 分辨率，摄影级超高清，光影质感真实。";
const TEXT_DIRECTIVE: &str = "2. 文字渲染：必须极其准确地渲染主标题和副标题的中文汉字，字体设计要符合“爆款”特征（如粗体、描边、发光、立体效果），确保在移动端小屏幕上依然清晰可读。";
const COMPOSITION_DIRECTIVE: &str = "3. 构图：主体突出，视觉中心明确，留出足够的文字排版空间。";

/// Incorporation clauses, emitted iff the matching reference image is part
/// of the request.
pub const SUBJECT_REFERENCE_CLAUSE: &str =
    "4. 请将提供的【主体参考图】中的人物或物体自然地融入画面中心。";
pub const STYLE_REFERENCE_CLAUSE: &str =
    "5. 请严格参考提供的【风格参考图】的配色方案、排版布局和整体氛围。";

/// Media type assumed for the image fed back into an edit call. The true
/// type of the previous output is not tracked across the edit boundary.
pub const EDIT_INPUT_MIME_TYPE: &str = "image/png";

/// Builds the generation prompt text: core info, style section, technical
/// directives, then the optional reference clauses.
pub fn build_generation_prompt(state: &GeneratorState) -> String {
    let mut lines = vec![
        "你是一个世界级的平面设计师和视觉艺术家。请为社交媒体视频生成一张极具吸引力的“爆款”封面图。"
            .to_string(),
        String::new(),
        "【核心信息】".to_string(),
        format!("- 平台格式：{}", state.platform.id()),
        format!("- 主标题（必须清晰可见）：{}", state.main_title),
        format!("- 副标题（辅助说明）：{}", state.sub_title),
        String::new(),
        "【设计风格】".to_string(),
        format!("- 风格关键词：{}", state.selected_tags.join(", ")),
        format!("- 额外要求：{}", state.custom_prompt),
        String::new(),
        "【技术要求】".to_string(),
        QUALITY_DIRECTIVE.to_string(),
        TEXT_DIRECTIVE.to_string(),
        COMPOSITION_DIRECTIVE.to_string(),
    ];

    let reference_clauses = [
        state
            .subject_image
            .is_some()
            .then_some(SUBJECT_REFERENCE_CLAUSE),
        state.style_image.is_some().then_some(STYLE_REFERENCE_CLAUSE),
    ];
    lines.extend(reference_clauses.into_iter().flatten().map(str::to_string));

    lines.push(String::new());
    lines.push("请直接生成最终的封面图片。".to_string());

    lines.join("\n")
}

/// Content segments for a generation request: the prompt text, then one
/// inline segment per reference image, subject before style. Payload and
/// media type pass through unchanged.
pub fn build_generation_parts(state: &GeneratorState) -> Vec<Part> {
    let mut parts = vec![Part::text(build_generation_prompt(state))];

    if let Some(image) = &state.subject_image {
        parts.push(Part::image(image));
    }
    if let Some(image) = &state.style_image {
        parts.push(Part::image(image));
    }

    parts
}

/// Builds the edit prompt text around the verbatim instruction.
pub fn build_edit_prompt(instruction: &str) -> String {
    format!(
        "基于提供的这张图片，请执行以下修改指令：\n\"{}\"\n\n要求：\n{}\n{}",
        instruction,
        "1. 保持原图的高画质和原有文字内容的准确性（除非指令要求修改文字）。",
        "2. 修改后的图片必须依然符合社交媒体封面图的美学标准。"
    )
}

/// Content segments for an edit request: the instruction text and exactly
/// one inline segment carrying the current image.
pub fn build_edit_parts(current_image_base64: &str, instruction: &str) -> Vec<Part> {
    vec![
        Part::text(build_edit_prompt(instruction)),
        Part::inline(current_image_base64, EDIT_INPUT_MIME_TYPE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageData, Platform};

    fn subject() -> ImageData {
        ImageData::new("c3ViamVjdA==", "image/jpeg")
    }

    fn style() -> ImageData {
        ImageData::new("c3R5bGU=", "image/webp")
    }

    #[test]
    fn test_no_images_no_clauses() {
        let state = GeneratorState::new("3天赚够100万", Platform::Douyin);
        let prompt = build_generation_prompt(&state);

        assert!(prompt.contains("3天赚够100万"));
        assert!(!prompt.contains(SUBJECT_REFERENCE_CLAUSE));
        assert!(!prompt.contains(STYLE_REFERENCE_CLAUSE));
        assert_eq!(build_generation_parts(&state).len(), 1);
    }

    #[test]
    fn test_both_images_both_clauses_in_order() {
        let state = GeneratorState::new("标题", Platform::Bilibili)
            .with_subject_image(subject())
            .with_style_image(style());

        let prompt = build_generation_prompt(&state);
        assert!(prompt.contains(SUBJECT_REFERENCE_CLAUSE));
        assert!(prompt.contains(STYLE_REFERENCE_CLAUSE));

        let parts = build_generation_parts(&state);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1], Part::image(&subject()));
        assert_eq!(parts[2], Part::image(&style()));
    }

    #[test]
    fn test_subject_only() {
        let state = GeneratorState::new("标题", Platform::Douyin).with_subject_image(subject());

        let prompt = build_generation_prompt(&state);
        assert!(prompt.contains(SUBJECT_REFERENCE_CLAUSE));
        assert!(!prompt.contains(STYLE_REFERENCE_CLAUSE));
        assert_eq!(build_generation_parts(&state).len(), 2);
    }

    #[test]
    fn test_style_only() {
        let state = GeneratorState::new("标题", Platform::Douyin).with_style_image(style());

        let prompt = build_generation_prompt(&state);
        assert!(!prompt.contains(SUBJECT_REFERENCE_CLAUSE));
        assert!(prompt.contains(STYLE_REFERENCE_CLAUSE));

        let parts = build_generation_parts(&state);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1], Part::image(&style()));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let state = GeneratorState::new("标题", Platform::Youtube)
            .with_sub_title("副标题")
            .with_tags(["电影感", "极简主义"])
            .with_custom_prompt("背景要是红色的");

        assert_eq!(build_generation_prompt(&state), build_generation_prompt(&state));
    }

    #[test]
    fn test_prompt_includes_all_state_fields() {
        let state = GeneratorState::new("主标题", Platform::Xiaohongshu)
            .with_sub_title("保姆级实操教程")
            .with_tags(["搞钱风", "大字报"])
            .with_custom_prompt("文字要发光");

        let prompt = build_generation_prompt(&state);
        assert!(prompt.contains("小红书 (3:4)"));
        assert!(prompt.contains("主标题"));
        assert!(prompt.contains("保姆级实操教程"));
        assert!(prompt.contains("搞钱风, 大字报"));
        assert!(prompt.contains("文字要发光"));
    }

    #[test]
    fn test_edit_parts_single_image_segment() {
        let parts = build_edit_parts("aW1hZ2U=", "把标题颜色改成黄色");

        assert_eq!(parts.len(), 2);
        assert!(!parts[0].is_inline());
        assert_eq!(parts[1], Part::inline("aW1hZ2U=", EDIT_INPUT_MIME_TYPE));
    }

    #[test]
    fn test_edit_prompt_embeds_instruction_verbatim() {
        let prompt = build_edit_prompt("背景换成城市夜景");
        assert!(prompt.contains("\"背景换成城市夜景\""));
        assert!(prompt.contains("美学标准"));
    }

    #[test]
    fn test_edit_reuses_extracted_base64_unchanged() {
        // The payload handed back for an edit is the extractor's output,
        // byte for byte, with no re-encoding.
        let extracted = ImageData::new("iVBORw0KGgo=", "image/png");
        let parts = build_edit_parts(&extracted.base64, "放大人物");

        match &parts[1] {
            Part::InlineData { inline_data } => assert_eq!(inline_data.data, extracted.base64),
            _ => panic!("second segment must be the inline image"),
        }
    }
}
