//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Morphblob");

    // Navigation
    m.insert(Key::NavShowcase, "展示");
    m.insert(Key::NavExamples, "示例");
    m.insert(Key::NavScene, "场景");
    m.insert(Key::NavSettings, "设置");

    // Showcase
    m.insert(Key::ShowcaseTitle, "形变展示");
    m.insert(Key::ShowcaseSubtitle, "调整形变图形，然后复制或导出");
    m.insert(Key::PreviewPause, "暂停");
    m.insert(Key::PreviewResume, "继续");
    m.insert(Key::PreviewHint, "按空格键暂停或继续");

    // Blob settings
    m.insert(Key::SectionBlob, "图形设置");
    m.insert(Key::LabelSize, "尺寸");
    m.insert(Key::LabelIntensity, "形变强度");
    m.insert(Key::LabelSpeed, "动画速度");
    m.insert(Key::LabelVertices, "顶点数");

    // Colors
    m.insert(Key::SectionColors, "颜色");
    m.insert(Key::LabelColorScheme, "配色方案");
    m.insert(Key::CustomColorsTitle, "自定义颜色");
    m.insert(Key::AddColor, "+ 添加颜色");
    m.insert(Key::RemoveColor, "移除");
    m.insert(Key::AdvancedColors, "高级取色器");

    // Gradient
    m.insert(Key::SectionGradient, "渐变");
    m.insert(Key::LabelGradientType, "渐变类型");
    m.insert(Key::GradientLinear, "线性");
    m.insert(Key::GradientRadial, "径向");
    m.insert(Key::LabelAnimateGradient, "渐变动画");
    m.insert(Key::LabelRotationSpeed, "旋转速度");
    m.insert(Key::LabelDirection, "方向");
    m.insert(Key::DirectionClockwise, "↻ 顺时针");
    m.insert(Key::DirectionCounterClockwise, "↺ 逆时针");
    m.insert(Key::LabelAngle, "角度");
    m.insert(Key::QuickDirections, "快捷方向");
    m.insert(Key::RadialHint, "径向渐变从中心向外扩散");

    // Effects
    m.insert(Key::SectionEffects, "效果");
    m.insert(Key::LabelGlow, "发光");
    m.insert(Key::LabelDropShadow, "投影");

    // Motion presets
    m.insert(Key::SectionMotionPresets, "动作预设");
    m.insert(Key::MotionSubtle, "轻微");
    m.insert(Key::MotionNormal, "普通");
    m.insert(Key::MotionDynamic, "动感");
    m.insert(Key::MotionExtreme, "极限");
    m.insert(Key::MotionStatic, "静止");
    m.insert(Key::MotionGradientSpin, "渐变旋转");
    m.insert(Key::MotionFastSpin, "快速旋转");

    // Showcase presets
    m.insert(Key::SectionPresets, "动画预设");
    m.insert(Key::PresetStatic, "静态");
    m.insert(Key::PresetStaticDesc, "轻柔形变，固定渐变");
    m.insert(Key::PresetRainbowSpin, "彩虹旋转");
    m.insert(Key::PresetRainbowSpinDesc, "顺时针旋转的彩虹渐变");
    m.insert(Key::PresetFastNeon, "快速霓虹");
    m.insert(Key::PresetFastNeonDesc, "强烈形变，快速反向旋转");
    m.insert(Key::PresetSlowSunset, "慢速日落");
    m.insert(Key::PresetSlowSunsetDesc, "缓慢流动的暖色");

    // Code & export
    m.insert(Key::SectionCode, "生成代码");
    m.insert(Key::CopyCode, "复制");
    m.insert(Key::Copied, "已复制！");
    m.insert(Key::ExportSvg, "导出 SVG");
    m.insert(Key::ExportDialogTitle, "导出为 SVG");
    m.insert(Key::ExportSuccess, "SVG 已导出");
    m.insert(Key::ExportFailed, "导出失败");

    // Color dialog
    m.insert(Key::ColorDialogTitle, "取色器");
    m.insert(Key::ColorDialogPalette, "调色板");
    m.insert(Key::ColorDialogSwatches, "色板");
    m.insert(Key::ColorDialogPreview, "预览");
    m.insert(Key::ColorDialogCopyCss, "复制 CSS");
    m.insert(Key::ColorDialogApply, "应用");
    m.insert(Key::ColorDialogCancel, "取消");

    // Examples
    m.insert(Key::ExamplesTitle, "示例");
    m.insert(Key::ExamplesSubtitle, "几个可以参考的配置");
    m.insert(Key::ExampleDefault, "默认");
    m.insert(Key::ExampleSunset, "日落，平缓");
    m.insert(Key::ExampleOcean, "海洋，轻微");
    m.insert(Key::SimpleBlobTitle, "简单图形");

    // Scene
    m.insert(Key::SceneTitle, "网格图形");
    m.insert(Key::SceneSubtitle, "三盏灯光下的形变球体");
    m.insert(Key::SceneHint, "拖动旋转，滚轮缩放");
    m.insert(Key::SceneAutoRotate, "自动旋转");

    // Settings
    m.insert(Key::SettingsTitle, "设置");
    m.insert(Key::SettingsDisplay, "显示");
    m.insert(Key::SettingsDarkMode, "深色模式");
    m.insert(Key::SettingsDarkModeDesc, "使用深色主题");
    m.insert(Key::SettingsLanguage, "语言");
    m.insert(Key::SettingsLanguageDesc, "界面语言");
    m.insert(Key::SettingsReduceMotion, "减少动画");
    m.insert(Key::SettingsReduceMotionDesc, "让所有图形停在当前帧");
    m.insert(Key::SettingsShowcase, "展示");
    m.insert(Key::SettingsResetShowcase, "重置展示");
    m.insert(Key::SettingsResetShowcaseDesc, "恢复默认图形和颜色");
    m.insert(Key::SettingsSave, "保存");
    m.insert(Key::SettingsSaved, "设置已保存");
    m.insert(Key::SettingsSaveFailed, "设置保存失败");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
