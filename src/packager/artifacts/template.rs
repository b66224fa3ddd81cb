//! Built-in artifact templates (Handlebars).

/// Windows build script.
pub const WINDOWS_SCRIPT_TEMPLATE: &str = r#"@echo off
echo Building {{product_name}} v{{version}} for Windows...

REM Create build directory
if not exist build mkdir build
cd build

REM Configure with CMake
cmake .. {{configure_flags}}
if errorlevel 1 exit /b 1

REM Build
cmake --build . --config Release
if errorlevel 1 exit /b 1

REM Run tests
echo Running tests...
ctest --output-on-failure -C Release

echo Build complete! Check the build directory for binaries.
pause
"#;

/// Linux/macOS build script.
pub const UNIX_SCRIPT_TEMPLATE: &str = r#"#!/bin/bash
set -e
echo "Building {{product_name}} v{{version}} for Unix/Linux/macOS..."

# Create build directory
mkdir -p build
cd build

# Configure with CMake
cmake .. {{configure_flags}}

# Build
cmake --build . --config Release -j$(nproc 2>/dev/null || sysctl -n hw.ncpu 2>/dev/null || echo 4)

# Run tests
echo "Running tests..."
ctest --output-on-failure

echo "Build complete! Check the build directory for binaries."
"#;

/// Installation guide.
pub const INSTALL_GUIDE_TEMPLATE: &str = r#"# {{product_name}} v{{version}} Installation Guide

## Requirements

- **C++20 compatible compiler**
  - GCC 10+ or Clang 12+ (Linux/macOS)
  - Visual Studio 2019 16.11+ or Visual Studio 2022 (Windows)
- **CMake 3.18 or later**
- **Git** (for cloning dependencies)

## Quick Start

### Windows
1. Open Command Prompt or PowerShell
2. Navigate to the {{product_name}} directory
3. Run: `{{windows_script}}`

### Linux/macOS
1. Open terminal
2. Navigate to the {{product_name}} directory
3. Run: `chmod +x {{unix_script}} && ./{{unix_script}}`

### Manual Build
```bash
# Create build directory
mkdir build && cd build

# Configure
cmake .. {{configure_flags}}

# Build
cmake --build . --config Release

# Test
ctest --output-on-failure
```

## Integration

### CMake Integration
```cmake
# Add {{product_name}} to your project
add_subdirectory(path/to/{{library_target}})
target_link_libraries(your_target {{library_target}})
```

### Basic Usage
```cpp
{{usage_snippet}}
```

## Documentation

- See `docs/` directory for detailed documentation
- Check `examples/` for usage examples
- Read `README.md` for feature overview

## Support

{{#if repository}}
- GitHub Issues: {{repository}}/issues
{{/if}}
- Documentation: See docs/ directory
"#;

/// Version descriptor.
pub const VERSION_TEMPLATE: &str = r#"{{product_name}} Version {{version}}
Release Date: {{release_date}}
Build Type: {{build_type}}

Features:
{{#each features}}
- {{this}}
{{/each}}

Git Tag: {{git_tag}}
Commit: {{commit}}

For detailed changes, see CHANGELOG.md
"#;
